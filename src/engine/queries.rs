/*!
 * Engine Queries
 * Non-blocking point-in-time reads for the presentation boundary
 */

use super::Engine;
use crate::core::types::{RunState, TimeUnit};
use crate::registry::Process;
use crate::trace::ExecutionStep;

impl Engine {
    /// Copy of every process; safe to inspect without further locking
    pub fn process_snapshot(&self) -> Vec<Process> {
        self.shared.read().registry.snapshot()
    }

    /// Copy of the execution trace
    pub fn trace_snapshot(&self) -> Vec<ExecutionStep> {
        self.shared.read().trace.snapshot()
    }

    /// Natural horizon of the current run's timeline
    pub fn max_time_unit(&self) -> TimeUnit {
        self.shared.read().trace.max_time_unit()
    }

    pub fn run_state(&self) -> RunState {
        self.shared.read().run_state
    }

    pub fn process_count(&self) -> usize {
        self.shared.read().registry.len()
    }

    /// True iff the registry is non-empty and every process finished
    pub fn all_completed(&self) -> bool {
        self.shared.read().registry.all_completed()
    }
}
