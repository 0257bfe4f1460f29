//! User CRUD domain service.
//!
//! Implements the [`UsersQuery`] and [`UsersCommand`] driving ports on top of
//! a [`UserRepository`]. Every mutation is a read-modify-write of the whole
//! store, so mutations are serialised behind a single writer lock; reads are
//! not. Writers in other processes sharing the same file are not coordinated.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{error, info};

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, IdAllocator, User, UserDraft, UserId};

/// Message carried by every unknown-identifier error.
pub const USER_NOT_FOUND_MESSAGE: &str = "Usuario no encontrado.";

/// User service implementing the driving ports.
pub struct UserService<R> {
    repo: Arc<R>,
    ids: IdAllocator,
    writer: Mutex<()>,
}

impl<R> UserService<R> {
    /// Create a service with an explicitly seeded allocator.
    pub fn new(repo: Arc<R>, ids: IdAllocator) -> Self {
        Self {
            repo,
            ids,
            writer: Mutex::new(()),
        }
    }

    /// Last identifier handed out by the allocator.
    pub fn last_id(&self) -> UserId {
        self.ids.current()
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    /// Scan the store once and seed the allocator from its highest identifier.
    ///
    /// # Errors
    /// Returns the repository error when the store exists but cannot be read.
    pub async fn bootstrap(repo: Arc<R>) -> Result<Self, UserPersistenceError> {
        let users = repo.list().await?;
        let ids = IdAllocator::from_users(&users);
        info!(
            records = users.len(),
            last_id = %ids.current(),
            next_id = ?ids.current().get().checked_add(1),
            "user identifier allocator initialised"
        );
        Ok(Self::new(repo, ids))
    }

    fn map_persistence_error(operation: &'static str, err: UserPersistenceError) -> Error {
        error!(error = %err, operation, "user store operation failed");
        Error::internal(format!("{operation} failed: {err}"))
    }

    async fn load(&self, operation: &'static str) -> Result<Vec<User>, Error> {
        self.repo
            .list()
            .await
            .map_err(|err| Self::map_persistence_error(operation, err))
    }
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository,
{
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.load("list users").await
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        self.load("find user")
            .await?
            .into_iter()
            .find(|user| user.id() == id)
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND_MESSAGE))
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create_user(&self, draft: UserDraft) -> Result<User, Error> {
        let _writer = self.writer.lock().await;
        let Some(id) = self.ids.next() else {
            error!(last_id = %self.ids.current(), "user identifier space exhausted");
            return Err(Error::internal("user identifier space exhausted"));
        };
        let user = User::new(id, draft);
        self.repo
            .append(&user)
            .await
            .map_err(|err| Self::map_persistence_error("create user", err))?;
        info!(user_id = %user.id(), "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, draft: UserDraft) -> Result<User, Error> {
        let _writer = self.writer.lock().await;
        let mut users = self.load("update user").await?;
        let updated = {
            let Some(user) = users.iter_mut().find(|user| user.id() == id) else {
                return Err(Error::not_found(USER_NOT_FOUND_MESSAGE));
            };
            user.replace_fields(draft);
            user.clone()
        };
        self.repo
            .replace_all(&users)
            .await
            .map_err(|err| Self::map_persistence_error("update user", err))?;
        info!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<usize, Error> {
        let _writer = self.writer.lock().await;
        let mut users = self.load("delete user").await?;
        let before = users.len();
        users.retain(|user| user.id() != id);
        let removed = before - users.len();
        self.repo
            .replace_all(&users)
            .await
            .map_err(|err| Self::map_persistence_error("delete user", err))?;
        info!(user_id = %id, removed, "user delete applied");
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
