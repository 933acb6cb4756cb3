/*!
 * Process Model
 * One simulated job and its runtime counters
 */

use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::TimeUnit;
use serde::{Deserialize, Serialize};

/// Display status derived from the counters, the way the presentation
/// layer reports it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Not completed and never executed
    Waiting,
    /// Not completed, has executed at least one unit
    Running,
    /// All burst units executed
    Completed,
}

impl ProcessStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Waiting => "Waiting",
            Self::Running => "Running",
            Self::Completed => "Completed",
        }
    }
}

/// One simulated job
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Process {
    /// Display label; non-empty, not required unique
    pub name: String,
    /// Total CPU units required; immutable after creation
    pub burst_time: TimeUnit,
    /// Units left to execute; starts at `burst_time`, never increases
    pub remaining_time: TimeUnit,
    /// Simulated unit at which the process becomes eligible. Stored and
    /// displayed, but selection does not gate on it (reference behavior).
    pub appearing_time: TimeUnit,
    /// Cumulative units spent eligible-but-not-running
    pub waiting_time: TimeUnit,
    /// Set exactly once at completion to `waiting_time + burst_time`
    pub turnaround_time: TimeUnit,
    /// Latches true when `remaining_time` reaches 0
    pub completed: bool,
}

impl Process {
    /// Validate boundary input and build a fresh process.
    ///
    /// Inputs are signed because they originate from presentation-side
    /// text fields.
    pub fn new(name: impl Into<String>, burst_time: i64, appearing_time: i64) -> SimResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(SimulationError::Validation(
                "process name must not be empty".to_string(),
            ));
        }
        if burst_time <= 0 {
            return Err(SimulationError::Validation(format!(
                "burst time must be positive, got {}",
                burst_time
            )));
        }
        if appearing_time < 0 {
            return Err(SimulationError::Validation(format!(
                "appearing time must be non-negative, got {}",
                appearing_time
            )));
        }

        Ok(Self {
            name,
            burst_time: burst_time as TimeUnit,
            remaining_time: burst_time as TimeUnit,
            appearing_time: appearing_time as TimeUnit,
            waiting_time: 0,
            turnaround_time: 0,
            completed: false,
        })
    }

    /// Status as the presentation layer displays it
    pub fn status(&self) -> ProcessStatus {
        if self.completed {
            ProcessStatus::Completed
        } else if self.remaining_time == self.burst_time {
            ProcessStatus::Waiting
        } else {
            ProcessStatus::Running
        }
    }

    /// Units executed so far
    pub fn executed_units(&self) -> TimeUnit {
        self.burst_time - self.remaining_time
    }

    /// Re-arm the runtime counters for a new run
    pub(crate) fn reset_runtime(&mut self) {
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.completed = false;
    }
}
