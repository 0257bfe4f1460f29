//! Driven port for the user record store and its errors.
//!
//! The store is read and written wholesale: every read returns the full
//! ordered collection and every update or delete rewrites it completely.

use async_trait::async_trait;

use crate::domain::User;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user record store adapters.
    pub enum UserPersistenceError {
        /// The backing file exists but could not be read.
        Read { message: String } => "user store read failed: {message}",
        /// A stored row could not be decoded into a user record.
        Parse { message: String } => "user store parse failed: {message}",
        /// Writing to the backing file failed.
        Write { message: String } => "user store write failed: {message}",
    }
}

/// Port for the flat collection of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Return every stored record in storage order; empty when nothing is stored.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Append one record carrying a pre-assigned identifier.
    async fn append(&self, user: &User) -> Result<(), UserPersistenceError>;

    /// Overwrite the whole store with `users`, preserving their order.
    async fn replace_all(&self, users: &[User]) -> Result<(), UserPersistenceError>;
}
