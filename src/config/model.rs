//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box
//! (pointing at the demo platform, with wallet and auth left empty).

use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Event platform endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Wallet session settings. Both fields must be set for minting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletConfig {
    #[serde(default)]
    pub account: Option<String>,
    #[serde(default)]
    pub network_id: Option<u64>,
    /// Connect the configured wallet at startup.
    #[serde(default = "default_true")]
    pub auto_connect: bool,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            account: None,
            network_id: None,
            auto_connect: true,
        }
    }
}

/// Auth provider session settings.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub token: Option<String>,
}

/// UI behavior settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// How long a toast stays visible, in ticks (20 ticks per second).
    #[serde(default = "default_toast_ttl_ticks")]
    pub toast_ttl_ticks: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            toast_ttl_ticks: default_toast_ttl_ticks(),
        }
    }
}

/// Debug trace logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_base_url() -> String {
    "https://api.events.example.com".to_string()
}
fn default_true() -> bool {
    true
}
fn default_toast_ttl_ticks() -> u64 {
    80
}
fn default_log_dir() -> String {
    "~/.local/share/mintdesk/logs".to_string()
}
