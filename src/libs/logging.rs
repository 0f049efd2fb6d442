//! Tracing subscriber setup.
//!
//! The subscriber is installed only in debug mode (`ROLLCALL_DEBUG` or
//! `RUST_LOG` set); otherwise the `msg_*` macros print plain lines and the
//! store's `tracing` events are discarded.

use super::messages::macros::is_debug_mode;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter when `RUST_LOG` is not set, e.g. `info` or `rollcall=debug`.
    pub level: String,
    /// `pretty` or `json`.
    pub format: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
            format: "pretty".into(),
        }
    }
}

impl LogConfig {
    /// Installs the global subscriber when debug mode is on.
    ///
    /// Calling it again after a subscriber is installed has no effect.
    pub fn init(&self) {
        if !is_debug_mode() {
            return;
        }

        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.level));

        let _ = match self.format.as_str() {
            "json" => fmt().json().with_env_filter(filter).try_init(),
            _ => fmt().with_env_filter(filter).try_init(),
        };
    }
}
