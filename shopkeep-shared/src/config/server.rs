use crate::models::theme::{ThemeSettings, hex_to_hsl};
use serde::{Deserialize, Serialize};
use std::{env, fs, path::PathBuf};

/// Log output format for the server.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable single-line output.
    #[default]
    Text,
    /// Structured JSON output.
    Json,
}

/// Session-related settings, including the seeded bootstrap accounts.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Name of the session cookie.
    pub cookie_name: String,
    /// Idle session lifetime in minutes.
    pub ttl_minutes: i64,
    /// Seeded administrator login name.
    pub admin_username: String,
    /// Seeded administrator password. A demo default; override it via
    /// `SHOPKEEP_ADMIN_PASSWORD` for anything beyond local use.
    pub admin_password: String,
    /// Seeded staff login name.
    pub staff_username: String,
    /// Seeded staff password.
    pub staff_password: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "SHOPKEEP_SESSION".to_string(),
            ttl_minutes: 480,
            admin_username: "admin".to_string(),
            admin_password: "12345678".to_string(),
            staff_username: "staff".to_string(),
            staff_password: "staff1234".to_string(),
        }
    }
}

/// WhatsApp Cloud API credentials for the reminder sink.
///
/// Both fields must be present for the notifier to operate; with either
/// missing, reminder sends fail loudly rather than silently dropping.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WhatsAppConfig {
    /// Base URL of the Cloud API.
    pub api_url: String,
    /// The business phone number id messages are sent from.
    pub phone_number_id: Option<String>,
    /// Bearer token for the Cloud API.
    pub access_token: Option<String>,
}

impl Default for WhatsAppConfig {
    fn default() -> Self {
        Self {
            api_url: "https://graph.facebook.com/v17.0".to_string(),
            phone_number_id: None,
            access_token: None,
        }
    }
}

/// The main configuration structure for the ShopKeep server.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Port for the HTTP server.
    pub server_port: u16,

    /// Logging level.
    pub log_level: String,

    /// Logging output format.
    #[serde(default)]
    pub log_format: LogFormat,

    /// Path to the built frontend static files.
    pub frontend_path: PathBuf,

    /// Theme served to the dashboard.
    #[serde(default)]
    pub theme: ThemeSettings,

    /// Session and seeded-account settings.
    #[serde(default)]
    pub session: SessionConfig,

    /// WhatsApp reminder sink settings.
    #[serde(default)]
    pub whatsapp: WhatsAppConfig,
}

impl Config {
    /// Generates a default configuration.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            server_port: 8080,
            log_level: "info".to_string(),
            log_format: LogFormat::Text,
            frontend_path: PathBuf::from("../shopkeep-web/dist"),
            theme: ThemeSettings::default(),
            session: SessionConfig::default(),
            whatsapp: WhatsAppConfig::default(),
        }
    }

    /// Loads the configuration from a file, environment variables, or
    /// defaults, in that order of precedence (file values win over env,
    /// the CLI port override wins over everything).
    ///
    /// # Errors
    /// Fails when the file cannot be read or parsed, when an environment
    /// override is malformed, or when the resolved port is zero.
    pub fn load_config(
        config_path: Option<PathBuf>,
        port_override: Option<u16>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let defaults = Config::with_defaults();
        let mut config = defaults.clone();

        if let Some(path) = config_path {
            let content = fs::read_to_string(&path)?;
            config = match path.extension().and_then(|ext| ext.to_str()) {
                Some("yaml" | "yml") => serde_yml::from_str(&content)?,
                Some("json") => serde_json::from_str(&content)?,
                _ => {
                    return Err("Unsupported configuration format. Use 'yaml' or 'json'.".into());
                }
            };
        }

        // Environment variables fill in anything the file left at defaults.
        if config.server_port == defaults.server_port
            && let Ok(port) = env::var("SHOPKEEP_SERVER_PORT")
        {
            config.server_port = port.parse().map_err(|_| {
                "Invalid SHOPKEEP_SERVER_PORT value: must be a valid number between 1 and 65535"
            })?;
        }
        if config.log_level == defaults.log_level
            && let Ok(log_level) = env::var("SHOPKEEP_LOG_LEVEL")
        {
            config.log_level = log_level;
        }
        if config.frontend_path == defaults.frontend_path
            && let Ok(frontend_path) = env::var("SHOPKEEP_FRONTEND_PATH")
        {
            config.frontend_path = PathBuf::from(frontend_path);
        }
        if config.session.admin_password == defaults.session.admin_password
            && let Ok(password) = env::var("SHOPKEEP_ADMIN_PASSWORD")
        {
            config.session.admin_password = password;
        }
        if config.whatsapp.phone_number_id.is_none()
            && let Ok(id) = env::var("SHOPKEEP_WHATSAPP_PHONE_NUMBER_ID")
        {
            config.whatsapp.phone_number_id = Some(id);
        }
        if config.whatsapp.access_token.is_none()
            && let Ok(token) = env::var("SHOPKEEP_WHATSAPP_ACCESS_TOKEN")
        {
            config.whatsapp.access_token = Some(token);
        }

        if let Some(port) = port_override {
            config.server_port = port;
        }

        if config.server_port == 0 {
            return Err("Invalid server port. Must be greater than 0.".into());
        }

        Ok(config)
    }

    /// Validate the complete configuration.
    ///
    /// # Errors
    /// Returns every detected problem, not just the first.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.server_port == 0 {
            errors.push("Invalid server port. Must be greater than 0.".to_string());
        }
        if self.session.ttl_minutes <= 0 {
            errors.push("Session ttl_minutes must be positive.".to_string());
        }
        if self.session.admin_username.trim().is_empty() {
            errors.push("Admin username must not be empty.".to_string());
        }
        if let Err(err) = hex_to_hsl(&self.theme.primary) {
            errors.push(format!("Invalid theme primary color: {err}"));
        }
        if self.theme.font_size == 0 || self.theme.heading_size == 0 {
            errors.push("Theme font sizes must be greater than 0.".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
