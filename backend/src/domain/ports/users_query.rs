//! Driving port for user read use-cases.
//!
//! Inbound adapters (HTTP handlers) use this port to fetch user records
//! without importing outbound persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, User, UserDraft, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Return every user in storage order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// Return the user with `id`, or a not-found error.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}

/// Deterministic users query for handler tests and documentation.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureUsersQuery;

impl FixtureUsersQuery {
    /// The single record the fixture knows about.
    pub fn fixture_user() -> Result<User, Error> {
        let draft = UserDraft::try_from_parts(
            Some("a@b.com".to_owned()),
            Some("Ana".to_owned()),
            Some("Lopez".to_owned()),
        )
        .map_err(|err| Error::internal(format!("invalid fixture user: {err}")))?;
        Ok(User::new(UserId::new(1), draft))
    }
}

#[async_trait]
impl UsersQuery for FixtureUsersQuery {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        Ok(vec![Self::fixture_user()?])
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        let user = Self::fixture_user()?;
        if user.id() == id {
            Ok(user)
        } else {
            Err(Error::not_found("Usuario no encontrado."))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_lists_single_user() {
        let users = FixtureUsersQuery.list_users().await.expect("users list");
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].nombre(), "Ana");
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_reports_unknown_ids_as_not_found() {
        let err = FixtureUsersQuery
            .find_user(UserId::new(2))
            .await
            .expect_err("unknown id");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }
}
