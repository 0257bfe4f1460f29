//! Server configuration loaded via OrthoConfig.
//!
//! Values come from CLI flags, `USUARIOS_*` environment variables and config
//! files. The unprefixed `PORT` variable is still honoured when
//! `USUARIOS_PORT` is not set.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::warn;

/// Port used when neither `USUARIOS_PORT` nor `PORT` is set.
pub const DEFAULT_PORT: u16 = 9001;
/// Interface the listener binds to by default.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Record store location used by default.
pub const DEFAULT_DATA_FILE: &str = "./usuarios.csv";
/// Unprefixed port variable kept for existing deployments.
pub const LEGACY_PORT_ENV: &str = "PORT";

/// Configuration values controlling the HTTP listener and record store.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USUARIOS")]
pub struct ServerSettings {
    /// TCP port to listen on.
    pub port: Option<u16>,
    /// Interface address or host name to bind.
    pub host: Option<String>,
    /// Path of the CSV file holding user records.
    pub data_file: Option<PathBuf>,
}

impl ServerSettings {
    /// Return the configured port, then the legacy `PORT` variable, then the default.
    pub fn port(&self) -> u16 {
        resolve_port(self.port, std::env::var(LEGACY_PORT_ENV).ok())
    }

    /// Return the configured host, falling back to the default.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    /// Return the configured record store path, falling back to the default.
    pub fn data_file(&self) -> PathBuf {
        self.data_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE))
    }

    /// Address tuple accepted by `HttpServer::bind`.
    pub fn bind_addr(&self) -> (String, u16) {
        (self.host().to_owned(), self.port())
    }
}

fn resolve_port(configured: Option<u16>, legacy: Option<String>) -> u16 {
    if let Some(port) = configured {
        return port;
    }
    match legacy.as_deref().map(str::trim) {
        None | Some("") => DEFAULT_PORT,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(value = raw, default = DEFAULT_PORT, "ignoring unparsable PORT value");
            DEFAULT_PORT
        }),
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for server configuration parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("usuarios")]).expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("USUARIOS_PORT", None::<String>),
            ("USUARIOS_HOST", None::<String>),
            ("USUARIOS_DATA_FILE", None::<String>),
            (LEGACY_PORT_ENV, None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port(), DEFAULT_PORT);
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.data_file(), PathBuf::from(DEFAULT_DATA_FILE));
        assert_eq!(settings.bind_addr(), ("0.0.0.0".to_owned(), 9001));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USUARIOS_PORT", Some("8080".to_owned())),
            ("USUARIOS_HOST", Some("127.0.0.1".to_owned())),
            ("USUARIOS_DATA_FILE", Some("/tmp/usuarios.csv".to_owned())),
            (LEGACY_PORT_ENV, Some("3000".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.port(), 8080);
        assert_eq!(settings.host(), "127.0.0.1");
        assert_eq!(settings.data_file(), PathBuf::from("/tmp/usuarios.csv"));
    }

    #[rstest]
    fn legacy_port_applies_when_prefixed_port_is_unset() {
        let _guard = lock_env([
            ("USUARIOS_PORT", None::<String>),
            (LEGACY_PORT_ENV, Some("3000".to_owned())),
        ]);

        assert_eq!(load_from_empty_args().port(), 3000);
    }

    #[rstest]
    #[case(Some(7000), Some("3000"), 7000)]
    #[case(None, Some("3000"), 3000)]
    #[case(None, Some(" 3000 "), 3000)]
    #[case(None, Some("not-a-port"), DEFAULT_PORT)]
    #[case(None, Some(""), DEFAULT_PORT)]
    #[case(None, None, DEFAULT_PORT)]
    fn resolve_port_precedence(
        #[case] configured: Option<u16>,
        #[case] legacy: Option<&str>,
        #[case] expected: u16,
    ) {
        assert_eq!(resolve_port(configured, legacy.map(str::to_owned)), expected);
    }
}
