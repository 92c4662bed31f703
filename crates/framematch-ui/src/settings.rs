// crates/framematch-ui/src/settings.rs
//
// User-editable service settings, persisted through eframe storage.
// Precedence: FRAMEMATCH_ENDPOINT env var > persisted value > default.

use std::time::Duration;

use framematch_net::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};

pub const SETTINGS_KEY: &str = "framematch_settings";
pub const ENDPOINT_ENV: &str = "FRAMEMATCH_ENDPOINT";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub endpoint:     String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint:     DEFAULT_ENDPOINT.to_string(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    pub fn load(storage: Option<&dyn eframe::Storage>) -> Self {
        let persisted = storage.and_then(|s| eframe::get_value::<Settings>(s, SETTINGS_KEY));
        Self::resolve(persisted, std::env::var(ENDPOINT_ENV).ok())
    }

    fn resolve(persisted: Option<Settings>, env_endpoint: Option<String>) -> Self {
        let mut settings = persisted.unwrap_or_default();
        if let Some(endpoint) = env_endpoint.filter(|e| !e.trim().is_empty()) {
            tracing::info!(%endpoint, "endpoint overridden by {ENDPOINT_ENV}");
            settings.endpoint = endpoint;
        }
        settings
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            endpoint: self.endpoint.clone(),
            timeout:  Duration::from_secs(self.timeout_secs.max(1)),
        }
    }
}
