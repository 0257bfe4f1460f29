//! HTTP server configuration object.

use std::sync::Arc;

use usuarios::domain::UserService;
use usuarios::outbound::persistence::CsvUserRepository;

/// Listener address and the bootstrapped service the routes drive.
pub struct ServerConfig {
    pub(crate) bind_addr: (String, u16),
    pub(crate) service: Arc<UserService<CsvUserRepository>>,
}

impl ServerConfig {
    /// Construct a server configuration around a bootstrapped user service.
    #[must_use]
    pub fn new(bind_addr: (String, u16), service: Arc<UserService<CsvUserRepository>>) -> Self {
        Self { bind_addr, service }
    }
}
