use serde::Deserialize;

/// Application configuration
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Signing keys and the registered client credential.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// PEM-encoded RSA private key used to sign tokens. Required; the
    /// server refuses to start without it.
    pub private_key: String,
    /// PEM-encoded RSA public key matching the private key.
    pub public_key: String,
    pub client: ClientConfig,
}

/// The single registered credential.
///
/// The password is configured in plaintext, matching the deployment
/// this server replaces. Override via config/local or the
/// APP__AUTH__CLIENT__* environment; anything internet-facing should
/// use a hashed credential store instead.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub username: String,
    pub password: String,
    pub authorities: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            username: "client".to_string(),
            password: "DoNotTell".to_string(),
            authorities: vec!["read".to_string()],
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registered_credential() {
        let config = AppConfig::default();

        assert_eq!(config.auth.client.username, "client");
        assert_eq!(config.auth.client.password, "DoNotTell");
        assert_eq!(config.auth.client.authorities, vec!["read".to_string()]);
    }

    #[test]
    fn test_default_server_binding() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn test_key_material_defaults_empty() {
        let config = AuthConfig::default();

        assert!(config.private_key.is_empty());
        assert!(config.public_key.is_empty());
    }

    #[test]
    fn test_log_format_deserializes_lowercase() {
        let format: LogFormat = serde_json::from_str("\"json\"").unwrap();
        assert!(matches!(format, LogFormat::Json));
    }
}
