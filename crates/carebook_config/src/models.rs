// --- File: crates/carebook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Booking Flow Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct BookingConfig {
    /// Delay between a confirmed booking and the navigation back to the catalog.
    pub redirect_delay_ms: u64,
    /// IANA zone used to decide what "today" is, e.g. "Europe/Zurich".
    pub time_zone: String,
    /// Drop the chosen time when a different date is picked.
    pub clear_time_on_date_change: bool,
    /// Abort the pending post-booking redirect when the visitor navigates manually.
    pub cancel_redirect_on_leave: bool,
    /// Block submission while name, email or phone is empty.
    pub enforce_required_fields: bool,
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            redirect_delay_ms: 2000,
            time_zone: "UTC".to_string(),
            clear_time_on_date_change: false,
            cancel_redirect_on_leave: true,
            enforce_required_fields: true,
        }
    }
}

// --- Visitor Session Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub idle_timeout_secs: u64,
    pub sweep_interval_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: "carebook_session".to_string(),
            idle_timeout_secs: 1800,
            sweep_interval_secs: 60,
        }
    }
}

// --- Notification Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct NotificationConfig {
    /// How many pending notifications a visitor keeps; the newest wins.
    pub limit: usize,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { limit: 1 }
    }
}

// --- Logging Config ---
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

// --- Unified App Configuration ---
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
