/*!
 * Execution Trace
 * Append-only record of which process ran during which time unit
 */

use crate::core::types::{ProcessId, TimeUnit};
use serde::{Deserialize, Serialize};

/// One trace record: the process at `process_index` executed during
/// `time_unit`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionStep {
    pub process_index: ProcessId,
    pub time_unit: TimeUnit,
}

/// Time-ordered run log. Append-only for the duration of a run, cleared
/// only when a new run starts.
#[derive(Debug, Default, Clone)]
pub struct ExecutionTrace {
    steps: Vec<ExecutionStep>,
}

impl ExecutionTrace {
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Append a step. Time units must be produced dense from 0.
    pub(crate) fn append(&mut self, step: ExecutionStep) {
        debug_assert_eq!(
            step.time_unit,
            self.steps.len() as TimeUnit,
            "trace time units must increase by exactly 1 from 0"
        );
        self.steps.push(step);
    }

    pub(crate) fn clear(&mut self) {
        self.steps.clear();
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Natural horizon of the run: last time unit + 1, or 0 when empty.
    /// Used to size a rendered timeline.
    pub fn max_time_unit(&self) -> TimeUnit {
        self.steps.last().map_or(0, |s| s.time_unit + 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecutionStep> {
        self.steps.iter()
    }

    /// Copy of the full trace, safe to hand across threads
    pub fn snapshot(&self) -> Vec<ExecutionStep> {
        self.steps.clone()
    }
}
