//! Server configuration.
//!
//! Service behavior is fixed at build time; the only runtime knob is log
//! verbosity via `RUST_LOG`.

use catalog_observability::LogFormat;

/// Port the service listens on.
pub const DEFAULT_PORT: u16 = 3001;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            log_format: LogFormat::default(),
        }
    }
}

impl ServerConfig {
    /// Loopback on an OS-assigned port, for tests.
    pub fn ephemeral() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            log_format: LogFormat::Compact,
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_binds_all_interfaces_on_fixed_port() {
        let config = ServerConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:3001");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn ephemeral_binds_loopback() {
        assert_eq!(ServerConfig::ephemeral().bind_address(), "127.0.0.1:0");
    }
}
