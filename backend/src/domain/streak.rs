//! Consecutive-day sleep streak rule.
//!
//! A streak is the length of the run of strictly consecutive calendar dates
//! ending at the most recently recorded sleep date. Each new entry date is
//! folded into the current [`StreakState`] by [`StreakState::advance`]; the
//! same rule replayed over a whole log history yields the stored state.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Streak counter and the date it ends on.
///
/// ## Invariants
/// - `count == 0` if and only if `last_sleep_date` is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StreakState {
    /// Length of the consecutive-day run ending at `last_sleep_date`.
    pub count: u32,
    /// Most recent date that advanced the streak.
    pub last_sleep_date: Option<NaiveDate>,
}

/// How a new entry date affected the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum StreakTransition {
    /// First recorded date; the streak starts at one.
    Started,
    /// The date follows the last one by exactly one day.
    Extended,
    /// The date leaves a gap of more than one day; the streak restarts.
    Reset,
    /// Same day as the last recorded date; nothing changes.
    Duplicate,
    /// Earlier than the last recorded date; nothing changes.
    OutOfOrder,
}

impl StreakTransition {
    /// Whether the transition changed the stored state.
    #[must_use]
    pub fn mutates(self) -> bool {
        matches!(self, Self::Started | Self::Extended | Self::Reset)
    }
}

/// Result of applying one entry date to a [`StreakState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreakUpdate {
    /// State before the entry was applied.
    pub previous: StreakState,
    /// State after the entry was applied.
    pub current: StreakState,
    /// Classification of the change.
    pub transition: StreakTransition,
}

impl StreakState {
    /// Construct a state from stored columns.
    ///
    /// A missing date forces the count back to zero so the invariant holds
    /// even for rows written by older clients.
    #[must_use]
    pub fn from_parts(count: u32, last_sleep_date: Option<NaiveDate>) -> Self {
        match last_sleep_date {
            Some(date) => Self {
                count: count.max(1),
                last_sleep_date: Some(date),
            },
            None => Self::default(),
        }
    }

    /// Apply a new sleep entry date.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use sleepease::domain::{StreakState, StreakTransition};
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    /// let first = StreakState::default().advance(day(1));
    /// let second = first.current.advance(day(2));
    /// assert_eq!(second.current.count, 2);
    /// assert_eq!(second.transition, StreakTransition::Extended);
    /// ```
    #[must_use]
    pub fn advance(self, date: NaiveDate) -> StreakUpdate {
        let (current, transition) = match self.last_sleep_date {
            None => (Self::started_on(date), StreakTransition::Started),
            Some(last) => match (date - last).num_days() {
                1 => (
                    Self {
                        count: self.count.saturating_add(1),
                        last_sleep_date: Some(date),
                    },
                    StreakTransition::Extended,
                ),
                delta if delta > 1 => (Self::started_on(date), StreakTransition::Reset),
                0 => (self, StreakTransition::Duplicate),
                _ => (self, StreakTransition::OutOfOrder),
            },
        };

        StreakUpdate {
            previous: self,
            current,
            transition,
        }
    }

    /// Re-derive the streak by folding [`advance`](Self::advance) over a
    /// sequence of entry dates in submission order.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use sleepease::domain::StreakState;
    ///
    /// let day = |d| NaiveDate::from_ymd_opt(2024, 1, d).unwrap();
    /// let state = StreakState::replay([day(1), day(2), day(3), day(6), day(7)]);
    /// assert_eq!(state.count, 2);
    /// assert_eq!(state.last_sleep_date, Some(day(7)));
    /// ```
    pub fn replay<I>(dates: I) -> Self
    where
        I: IntoIterator<Item = NaiveDate>,
    {
        dates
            .into_iter()
            .fold(Self::default(), |state, date| state.advance(date).current)
    }

    fn started_on(date: NaiveDate) -> Self {
        Self {
            count: 1,
            last_sleep_date: Some(date),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn day(month: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, month, d).expect("valid date")
    }

    #[fixture]
    fn three_day_run() -> StreakState {
        StreakState::replay([day(1, 1), day(1, 2), day(1, 3)])
    }

    #[rstest]
    fn first_entry_starts_streak() {
        let update = StreakState::default().advance(day(1, 1));
        assert_eq!(update.transition, StreakTransition::Started);
        assert_eq!(update.current, StreakState::from_parts(1, Some(day(1, 1))));
        assert_eq!(update.previous, StreakState::default());
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(40)]
    fn consecutive_dates_count_each_day(#[case] n: u32) {
        let start = day(1, 1);
        let state = StreakState::replay(
            (0..n).map(|offset| start + chrono::Days::new(u64::from(offset))),
        );
        assert_eq!(state.count, n);
    }

    #[rstest]
    fn consecutive_date_across_month_boundary_extends() {
        let state = StreakState::replay([day(1, 30), day(1, 31), day(2, 1)]);
        assert_eq!(state.count, 3);
    }

    #[rstest]
    fn gap_resets_to_one(three_day_run: StreakState) {
        let update = three_day_run.advance(day(1, 6));
        assert_eq!(update.transition, StreakTransition::Reset);
        assert_eq!(update.current.count, 1);
        assert_eq!(update.current.last_sleep_date, Some(day(1, 6)));
    }

    #[rstest]
    fn duplicate_day_is_noop(three_day_run: StreakState) {
        let update = three_day_run.advance(day(1, 3));
        assert_eq!(update.transition, StreakTransition::Duplicate);
        assert_eq!(update.current, three_day_run);
        assert!(!update.transition.mutates());
    }

    #[rstest]
    fn out_of_order_day_is_noop(three_day_run: StreakState) {
        let update = three_day_run.advance(day(1, 1));
        assert_eq!(update.transition, StreakTransition::OutOfOrder);
        assert_eq!(update.current, three_day_run);
        assert!(!update.transition.mutates());
    }

    #[rstest]
    fn replay_matches_incremental_updates() {
        let dates = [
            day(1, 1),
            day(1, 2),
            day(1, 2),
            day(1, 1),
            day(1, 3),
            day(1, 9),
            day(1, 10),
        ];
        let mut incremental = StreakState::default();
        for date in dates {
            incremental = incremental.advance(date).current;
        }
        assert_eq!(StreakState::replay(dates), incremental);
        assert_eq!(incremental.count, 2);
        assert_eq!(incremental.last_sleep_date, Some(day(1, 10)));
    }

    #[rstest]
    #[case(0, None, StreakState::default())]
    #[case(4, None, StreakState::default())]
    #[case(0, Some(day(3, 1)), StreakState { count: 1, last_sleep_date: Some(day(3, 1)) })]
    #[case(7, Some(day(3, 1)), StreakState { count: 7, last_sleep_date: Some(day(3, 1)) })]
    fn from_parts_restores_invariant(
        #[case] count: u32,
        #[case] date: Option<NaiveDate>,
        #[case] expected: StreakState,
    ) {
        assert_eq!(StreakState::from_parts(count, date), expected);
    }

    #[rstest]
    fn transitions_serialise_as_snake_case() {
        let value = serde_json::to_value(StreakTransition::OutOfOrder).expect("serialise");
        assert_eq!(value, serde_json::json!("out_of_order"));
    }
}
