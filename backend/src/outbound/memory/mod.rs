//! In-process store implementing every driven persistence port.
//!
//! Used when no database URL is configured and by HTTP tests. One mutex
//! guards all collections, so an append and its streak update are observed
//! together and concurrent submissions for a user cannot interleave.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use mockable::{Clock, DefaultClock};
use uuid::Uuid;
use zeroize::Zeroizing;

use crate::domain::ports::{
    GratitudeLogRepository, GratitudeLogRepositoryError, IdentityProvider,
    IdentityProviderError, RecordedSleepEntry, SleepLogRepository, SleepLogRepositoryError,
    UserPersistenceError, UserRepository,
};
use crate::domain::{
    GratitudeNote, LoginCredentials, NewAccount, NewGratitudeNote, NewSleepEntry, SleepEntry,
    UserId, UserProfile,
};
use crate::outbound::password::{hash_password_blocking, verify_password_blocking};

struct AccountRecord {
    id: UserId,
    password_hash: String,
}

#[derive(Default)]
struct StoreState {
    /// Keyed by normalised email.
    accounts: HashMap<String, AccountRecord>,
    users: Vec<UserProfile>,
    sleep_logs: Vec<SleepEntry>,
    gratitude_logs: Vec<GratitudeNote>,
}

impl StoreState {
    fn user_mut(&mut self, id: &UserId) -> Option<&mut UserProfile> {
        self.users.iter_mut().find(|user| &user.id == id)
    }
}

/// Mutex-guarded store shared by all in-memory adapters.
pub struct InMemoryStore {
    state: Mutex<StoreState>,
    clock: Arc<dyn Clock>,
}

const POISONED: &str = "in-memory store lock poisoned";

impl InMemoryStore {
    /// Create an empty store stamping records with `clock`.
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            state: Mutex::new(StoreState::default()),
            clock,
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, StoreState>> {
        self.state.lock().ok()
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

#[async_trait]
impl IdentityProvider for InMemoryStore {
    async fn create_account(&self, account: &NewAccount) -> Result<UserId, IdentityProviderError> {
        let password = Zeroizing::new(account.credentials().password().to_owned());
        let password_hash = hash_password_blocking(password).await?;

        let mut state = self
            .lock()
            .ok_or_else(|| IdentityProviderError::connection(POISONED))?;
        let email = account.email().as_ref();
        if state.accounts.contains_key(email) {
            return Err(IdentityProviderError::email_taken(email));
        }
        let id = UserId::random();
        state.accounts.insert(
            email.to_owned(),
            AccountRecord {
                id: id.clone(),
                password_hash,
            },
        );
        Ok(id)
    }

    async fn verify_credentials(
        &self,
        credentials: &LoginCredentials,
    ) -> Result<Option<UserId>, IdentityProviderError> {
        let stored = {
            let state = self
                .lock()
                .ok_or_else(|| IdentityProviderError::connection(POISONED))?;
            state
                .accounts
                .get(credentials.email().as_ref())
                .map(|record| (record.id.clone(), record.password_hash.clone()))
        };
        let Some((id, password_hash)) = stored else {
            return Ok(None);
        };

        let password = Zeroizing::new(credentials.password().to_owned());
        let verified = verify_password_blocking(password, password_hash).await?;
        Ok(verified.then_some(id))
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, user: &UserProfile) -> Result<(), UserPersistenceError> {
        let mut state = self
            .lock()
            .ok_or_else(|| UserPersistenceError::connection(POISONED))?;
        if state.users.iter().any(|existing| existing.id == user.id) {
            return Err(UserPersistenceError::query(format!(
                "user {} already exists",
                user.id
            )));
        }
        state.users.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserPersistenceError> {
        let state = self
            .lock()
            .ok_or_else(|| UserPersistenceError::connection(POISONED))?;
        Ok(state.users.iter().find(|user| &user.id == id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<UserProfile>, UserPersistenceError> {
        let state = self
            .lock()
            .ok_or_else(|| UserPersistenceError::connection(POISONED))?;
        Ok(state.users.clone())
    }
}

#[async_trait]
impl SleepLogRepository for InMemoryStore {
    async fn append_with_streak(
        &self,
        entry: &NewSleepEntry,
    ) -> Result<RecordedSleepEntry, SleepLogRepositoryError> {
        let created_at = self.clock.utc();
        let mut state = self
            .lock()
            .ok_or_else(|| SleepLogRepositoryError::connection(POISONED))?;

        let stored = SleepEntry::from_new(entry.clone(), Uuid::new_v4(), created_at);
        state.sleep_logs.push(stored.clone());

        let streak = state.user_mut(&entry.user_id).map(|user| {
            let update = user.streak.advance(entry.date);
            user.streak = update.current;
            update
        });

        Ok(RecordedSleepEntry {
            entry: stored,
            streak,
        })
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<SleepEntry>, SleepLogRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| SleepLogRepositoryError::connection(POISONED))?;
        Ok(state
            .sleep_logs
            .iter()
            .filter(|entry| &entry.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<SleepEntry>, SleepLogRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| SleepLogRepositoryError::connection(POISONED))?;
        Ok(state.sleep_logs.clone())
    }
}

#[async_trait]
impl GratitudeLogRepository for InMemoryStore {
    async fn append(
        &self,
        note: &NewGratitudeNote,
    ) -> Result<GratitudeNote, GratitudeLogRepositoryError> {
        let created_at = self.clock.utc();
        let mut state = self
            .lock()
            .ok_or_else(|| GratitudeLogRepositoryError::connection(POISONED))?;
        let stored = GratitudeNote::from_new(note.clone(), Uuid::new_v4(), created_at);
        state.gratitude_logs.push(stored.clone());
        Ok(stored)
    }

    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<GratitudeNote>, GratitudeLogRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| GratitudeLogRepositoryError::connection(POISONED))?;
        Ok(state
            .gratitude_logs
            .iter()
            .filter(|note| &note.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_all(&self) -> Result<Vec<GratitudeNote>, GratitudeLogRepositoryError> {
        let state = self
            .lock()
            .ok_or_else(|| GratitudeLogRepositoryError::connection(POISONED))?;
        Ok(state.gratitude_logs.clone())
    }
}
