//! Application configuration loaded from environment variables.

use envconfig::Envconfig;
use std::sync::LazyLock;

/// All environment variables used to configure the application.
///
/// Every field has a default so the inbox runs out of the box on a
/// developer machine; deployments override through the environment.
#[derive(Envconfig, Clone)]
pub struct AppConfig {
    /// Environment name the app is deployed to
    /// Values: "local", "dev", "prod"
    #[envconfig(default = "local")]
    pub env: String,

    /// SQLite database URL
    /// Example: "sqlite:sms.db"
    #[envconfig(default = "sqlite:sms.db")]
    pub db_host: String,

    /// Host address for web server binding
    #[envconfig(default = "0.0.0.0")]
    pub web_server_host: String,

    /// Port for web server binding
    #[envconfig(default = "3000")]
    pub web_server_port: u16,

    /// Log level filter for the application logger
    /// Values: "off", "error", "warn", "info", "debug", "trace"
    #[envconfig(default = "info")]
    pub loglevel: String,
}

impl AppConfig {
    /// Constructs the base URL the server announces at startup
    pub fn base_url(&self) -> String {
        format!(
            "http://{host}:{port}",
            host = self.web_server_host,
            port = self.web_server_port
        )
    }
}

/// Global application configuration instance, loaded on first access.
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    AppConfig::init_from_env()
        .expect("Failed to load application configuration. Check environment variables.")
});
