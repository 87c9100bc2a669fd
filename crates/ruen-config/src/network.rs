use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    10
}

fn default_user_agent() -> String {
    format!("ruen/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for the outgoing dictionary requests
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("RUEN_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let user_agent = env::var("RUEN_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            timeout_seconds,
            user_agent,
        }
    }

    pub fn timeout(&self) -> Duration {
        // zero would mean every request times out immediately
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
