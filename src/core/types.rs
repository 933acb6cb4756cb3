/*!
 * Core Types
 * Common types used across the simulator
 */

use serde::{Deserialize, Serialize};

/// Process ID type - index into the registry, stable for the whole run
pub type ProcessId = usize;

/// One unit of simulated time
pub type TimeUnit = u64;

/// Engine lifecycle state - exactly one is active at a time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// No run in progress; the registry may be modified
    #[default]
    NotRunning,
    /// The tick loop is advancing simulated time
    Running,
    /// The tick loop is alive but skipping all work
    Paused,
}

impl RunState {
    /// String representation for logging and error messages
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotRunning => "not_running",
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

impl std::fmt::Display for RunState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
