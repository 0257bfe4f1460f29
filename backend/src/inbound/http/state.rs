//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{FixtureUsersCommand, FixtureUsersQuery, UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read-side use-cases.
    pub users: Arc<dyn UsersQuery>,
    /// Write-side use-cases.
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from separate query and command ports.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Construct state from one service implementing both ports.
    ///
    /// # Examples
    /// ```no_run
    /// use std::sync::Arc;
    ///
    /// use usuarios::domain::{IdAllocator, UserService};
    /// use usuarios::inbound::http::state::HttpState;
    /// use usuarios::outbound::persistence::CsvUserRepository;
    ///
    /// let repo = Arc::new(CsvUserRepository::new("./usuarios.csv"));
    /// let service = Arc::new(UserService::new(repo, IdAllocator::default()));
    /// let _state = HttpState::from_service(service);
    /// ```
    pub fn from_service<S>(service: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        Self {
            users: service.clone(),
            users_command: service,
        }
    }
}

impl Default for HttpState {
    /// Fixture-backed state for tests and documentation.
    fn default() -> Self {
        Self::new(Arc::new(FixtureUsersQuery), Arc::new(FixtureUsersCommand))
    }
}
