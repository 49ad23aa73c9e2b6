//! User repository interface (identity provider seam)

use async_trait::async_trait;

use super::model::{NewUser, User};
use crate::domain::DomainResult;

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Resolve an email claim to a user record
    async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: &str) -> DomainResult<Option<User>>;

    /// Insert a user (startup seed, tests); returns the stored record
    async fn insert(&self, user: NewUser) -> DomainResult<User>;
}
