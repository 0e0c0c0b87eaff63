//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{UserId, UserProfile};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a freshly registered user record.
    async fn insert(&self, user: &UserProfile) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, UserPersistenceError>;

    /// Every user record, oldest first.
    async fn list_all(&self) -> Result<Vec<UserProfile>, UserPersistenceError>;
}
