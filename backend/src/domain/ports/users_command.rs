//! Driving port for user mutation use-cases.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for creating, updating and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Allocate the next identifier and persist a new record.
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error>;

    /// Replace every field of an existing record, keeping its identifier.
    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error>;

    /// Remove every record with `id` and return how many were removed.
    ///
    /// Deleting an unknown identifier succeeds and removes nothing.
    async fn delete_user(&self, id: UserId) -> Result<usize, Error>;
}

/// Echoing users command for handler tests; persists nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersCommand;

#[async_trait]
impl UsersCommand for FixtureUsersCommand {
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        Ok(User::new(UserId::new(1), draft))
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        Ok(User::new(id, draft))
    }

    async fn delete_user(&self, _id: UserId) -> Result<usize, Error> {
        Ok(0)
    }
}
