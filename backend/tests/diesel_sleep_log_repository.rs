//! Integration tests for `DieselSleepLogRepository` against embedded PostgreSQL.
//!
//! The streak update shares a transaction with the insert and locks the
//! owner's `users` row, so these suites check the stored row rather than the
//! returned value alone. Each test gets its own cluster and database.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;
use uuid::Uuid;

use sleepease::domain::ports::{SleepLogRepository, UserRepository};
use sleepease::domain::{
    Email, MoodLabel, NewSleepEntry, SleepHours, SleepQuality, StreakTransition, UserId, UserMode,
    UserProfile, Username,
};
use sleepease::outbound::persistence::{
    DbPool, DieselSleepLogRepository, DieselUserRepository, PoolConfig, run_pending_migrations,
};

#[path = "support/pg_embed.rs"]
mod pg_embed;

use pg_embed::{create_database, skip_or_fail, start_cluster};

struct TestContext {
    runtime: Runtime,
    _cluster: TestCluster,
    sleep_logs: DieselSleepLogRepository,
    users: DieselUserRepository,
    user_id: UserId,
}

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).expect("valid date")
}

fn entry(user_id: &UserId, date: NaiveDate) -> NewSleepEntry {
    NewSleepEntry {
        user_id: user_id.clone(),
        hours: SleepHours::new(7.5).expect("hours"),
        quality: SleepQuality::new(8).expect("quality"),
        mood: MoodLabel::new("rested").expect("mood"),
        date,
    }
}

fn setup_context() -> Result<TestContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = start_cluster()?;
    let url = create_database(&cluster, &format!("sleep_logs_{}", Uuid::new_v4().simple()))?;

    let pool = runtime
        .block_on(async {
            run_pending_migrations(&url)
                .await
                .map_err(|err| err.to_string())?;
            DbPool::new(PoolConfig::new(&url).with_max_size(4))
                .await
                .map_err(|err| err.to_string())
        })?;

    let users = DieselUserRepository::new(pool.clone());
    let user_id = UserId::random();
    let profile = UserProfile::registered(
        user_id.clone(),
        Email::new("sleeper@example.com").map_err(|err| err.to_string())?,
        Username::new("Sleeper").map_err(|err| err.to_string())?,
        UserMode::default(),
        Utc::now(),
    );
    runtime
        .block_on(users.insert(&profile))
        .map_err(|err| err.to_string())?;

    Ok(TestContext {
        runtime,
        _cluster: cluster,
        sleep_logs: DieselSleepLogRepository::new(pool),
        users,
        user_id,
    })
}

#[fixture]
fn repo_context() -> Option<TestContext> {
    match setup_context() {
        Ok(ctx) => Some(ctx),
        Err(reason) => skip_or_fail(reason),
    }
}

impl TestContext {
    fn append(&self, date: NaiveDate) -> sleepease::domain::ports::RecordedSleepEntry {
        self.runtime
            .block_on(self.sleep_logs.append_with_streak(&entry(&self.user_id, date)))
            .expect("append succeeds")
    }

    fn stored_streak(&self) -> (u32, Option<NaiveDate>) {
        let user = self
            .runtime
            .block_on(self.users.find_by_id(&self.user_id))
            .expect("fetch succeeds")
            .expect("user exists");
        (user.streak.count, user.streak.last_sleep_date)
    }
}

#[rstest]
fn consecutive_nights_extend_and_a_gap_resets(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: consecutive_nights_extend_and_a_gap_resets skipped");
        return;
    };

    let counts: Vec<u32> = [1, 2, 3]
        .into_iter()
        .map(|d| ctx.append(day(d)).streak_count())
        .collect();
    assert_eq!(counts, [1, 2, 3]);
    assert_eq!(ctx.stored_streak(), (3, Some(day(3))));

    let after_gap = ctx.append(day(7));
    assert_eq!(
        after_gap.streak.map(|update| update.transition),
        Some(StreakTransition::Reset)
    );
    assert_eq!(ctx.stored_streak(), (1, Some(day(7))));
}

#[rstest]
#[case::same_night(day(5))]
#[case::earlier_night(day(2))]
fn stale_dates_leave_the_user_row_untouched(
    repo_context: Option<TestContext>,
    #[case] stale: NaiveDate,
) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: stale_dates_leave_the_user_row_untouched skipped");
        return;
    };

    ctx.append(day(4));
    ctx.append(day(5));
    let recorded = ctx.append(stale);

    assert!(
        recorded
            .streak
            .is_some_and(|update| !update.transition.mutates()),
        "expected a non-mutating transition, got {:?}",
        recorded.streak
    );
    assert_eq!(recorded.streak_count(), 2);
    assert_eq!(ctx.stored_streak(), (2, Some(day(5))));

    let history = ctx
        .runtime
        .block_on(ctx.sleep_logs.list_for_user(&ctx.user_id))
        .expect("history");
    let dates: Vec<NaiveDate> = history.iter().map(|e| e.date).collect();
    assert_eq!(dates, [day(4), day(5), stale]);
}

#[rstest]
fn concurrent_appends_for_one_user_serialise(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: concurrent_appends_for_one_user_serialise skipped");
        return;
    };

    ctx.append(day(1));
    let repo = Arc::new(ctx.sleep_logs.clone());
    let user_id = ctx.user_id.clone();

    // Eight submissions for the following night race each other: the row
    // lock lets exactly one extend the streak and the rest see a duplicate.
    let transitions = ctx.runtime.block_on(async move {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                let next = entry(&user_id, day(2));
                tokio::spawn(async move { repo.append_with_streak(&next).await })
            })
            .collect();
        let mut transitions = Vec::new();
        for handle in handles {
            let recorded = handle.await.expect("join").expect("append succeeds");
            transitions.extend(recorded.streak.map(|update| update.transition));
        }
        transitions
    });

    let extended = transitions
        .iter()
        .filter(|t| **t == StreakTransition::Extended)
        .count();
    let duplicates = transitions
        .iter()
        .filter(|t| **t == StreakTransition::Duplicate)
        .count();
    assert_eq!((extended, duplicates), (1, 7));
    assert_eq!(ctx.stored_streak(), (2, Some(day(2))));

    let stored = ctx
        .runtime
        .block_on(ctx.sleep_logs.list_for_user(&ctx.user_id))
        .expect("history");
    assert_eq!(stored.len(), 9);
}

#[rstest]
fn entries_for_unknown_users_are_stored_without_a_streak(repo_context: Option<TestContext>) {
    let Some(ctx) = repo_context else {
        eprintln!("SKIP-TEST-CLUSTER: entries_for_unknown_users_are_stored_without_a_streak skipped");
        return;
    };

    let stranger = UserId::random();
    let recorded = ctx
        .runtime
        .block_on(ctx.sleep_logs.append_with_streak(&entry(&stranger, day(1))))
        .expect("append succeeds");

    assert!(recorded.streak.is_none());
    assert_eq!(recorded.streak_count(), 0);
    let all = ctx
        .runtime
        .block_on(ctx.sleep_logs.list_all())
        .expect("list all");
    assert_eq!(all.len(), 1);
    assert_eq!(ctx.stored_streak(), (0, None));
}
