//! Server configuration loaded via OrthoConfig.

use std::net::{IpAddr, Ipv4Addr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

/// Configuration values controlling the HTTP listener.
///
/// Environment variables use the `ZELENOMAP_` prefix, e.g.
/// `ZELENOMAP_PORT=9090`.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ZELENOMAP")]
pub struct ServerSettings {
    /// Optional bind address override.
    pub host: Option<IpAddr>,
    /// TCP port the server listens on.
    #[ortho_config(default = 8080)]
    pub port: u16,
}

impl ServerSettings {
    /// Return the configured bind address, falling back to all interfaces.
    #[must_use]
    pub fn host(&self) -> IpAddr {
        self.host.unwrap_or(DEFAULT_HOST)
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
        ServerSettings::load_from_iter([OsString::from("zelenomap-backend")])
            .expect("config should load")
    }

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("ZELENOMAP_HOST", None::<String>),
            ("ZELENOMAP_PORT", None::<String>),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), DEFAULT_HOST);
        assert_eq!(settings.port, 8080);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ZELENOMAP_HOST", Some("127.0.0.1".to_owned())),
            ("ZELENOMAP_PORT", Some("9090".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(settings.host(), IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(settings.port, 9090);
    }
}
