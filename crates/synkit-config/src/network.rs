use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    20
}

fn default_user_agent() -> String {
    concat!("synkit/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Outbound HTTP settings for dictionary requests
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl NetworkConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
