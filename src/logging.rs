//! Dispatch trace log.
//!
//! Disabled unless `CHARCELL_DEBUG=1` or `CHARCELL_DEBUG_LOG=<path>` is set. Each record is one
//! line appended to the trace file. The first failed write disables the log for the rest of the
//! process so a bad path never disturbs the update loop.

use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::EnvConfig;

/// One dispatcher decision worth tracing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    FocusMoved {
        tick: u64,
        from: Option<u64>,
        to: Option<u64>,
    },
    CaptureChanged {
        tick: u64,
        holder: Option<u64>,
        captured: bool,
    },
    EventDiscarded {
        tick: u64,
    },
    FirstFrameRepaint {
        tick: u64,
    },
}

impl fmt::Display for TraceEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn id(value: Option<u64>) -> String {
            value.map_or_else(|| "none".to_string(), |id| id.to_string())
        }
        match self {
            TraceEvent::FocusMoved { tick, from, to } => {
                write!(f, "tick={tick} focus {} -> {}", id(*from), id(*to))
            }
            TraceEvent::CaptureChanged {
                tick,
                holder,
                captured,
            } => {
                let state = if *captured { "captured" } else { "released" };
                write!(f, "tick={tick} holder {} {state}", id(*holder))
            }
            TraceEvent::EventDiscarded { tick } => {
                write!(f, "tick={tick} event discarded: no live focus holder")
            }
            TraceEvent::FirstFrameRepaint { tick } => {
                write!(f, "tick={tick} scheduled first-frame repaint")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct DebugLog {
    path: Option<PathBuf>,
    failed: bool,
}

impl DebugLog {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn to_path(path: impl AsRef<Path>) -> Self {
        Self {
            path: Some(path.as_ref().to_path_buf()),
            failed: false,
        }
    }

    pub fn from_config(config: &EnvConfig) -> Self {
        match config.debug_log_path() {
            Some(path) => Self::to_path(path),
            None => Self::disabled(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.path.is_some() && !self.failed
    }

    pub fn record(&mut self, event: TraceEvent) {
        if self.failed {
            return;
        }
        let Some(path) = self.path.as_ref() else {
            return;
        };
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{event}"));
        if result.is_err() {
            self.failed = true;
        }
    }
}
