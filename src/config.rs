//! Environment configuration.

use std::env;

use once_cell::sync::Lazy;

use crate::core::input_event::Axis;

pub const DEFAULT_DEBUG_LOG: &str = "charcell-debug.log";

#[derive(Debug, Clone)]
pub struct EnvConfig {
    pub debug: bool,
    pub debug_log: Option<String>,
    pub navigation_axis: Axis,
}

static PROCESS_CONFIG: Lazy<EnvConfig> = Lazy::new(EnvConfig::from_env);

impl EnvConfig {
    pub fn from_env() -> Self {
        Self {
            debug: env_flag("CHARCELL_DEBUG"),
            debug_log: env_string_opt("CHARCELL_DEBUG_LOG"),
            navigation_axis: if env_flag("CHARCELL_NAV_HORIZONTAL") {
                Axis::Horizontal
            } else {
                Axis::Vertical
            },
        }
    }

    /// Snapshot of the environment taken the first time it is requested.
    pub fn process() -> &'static EnvConfig {
        &PROCESS_CONFIG
    }

    /// Trace file path, if tracing is enabled.
    pub fn debug_log_path(&self) -> Option<&str> {
        match (self.debug, self.debug_log.as_deref()) {
            (_, Some(path)) => Some(path),
            (true, None) => Some(DEFAULT_DEBUG_LOG),
            (false, None) => None,
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            debug: false,
            debug_log: None,
            navigation_axis: Axis::Vertical,
        }
    }
}

fn env_flag(key: &str) -> bool {
    env::var(key).map(|value| value == "1").unwrap_or(false)
}

fn env_string_opt(key: &str) -> Option<String> {
    env::var(key).ok().and_then(|value| {
        if value.trim().is_empty() {
            None
        } else {
            Some(value)
        }
    })
}
