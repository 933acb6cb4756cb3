/*!
 * Selection Policy
 * The seam that decides which process gets the next time unit
 */

use crate::core::types::{ProcessId, TimeUnit};
use crate::registry::Registry;

/// Picks the process to execute for the next unit
pub trait SelectionPolicy: Send + Sync {
    /// Registry index of the chosen process, or None when nothing is
    /// runnable
    fn select(&self, registry: &Registry) -> Option<ProcessId>;

    /// Short name for logging
    fn name(&self) -> &'static str;
}

/// Shortest-Remaining-Time-Next: the non-completed process with the least
/// remaining time wins; ties resolve to the earliest registry index.
/// Appearing time does not gate selection (reference behavior).
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionPolicy for ShortestRemaining {
    fn select(&self, registry: &Registry) -> Option<ProcessId> {
        let mut best: Option<(ProcessId, TimeUnit)> = None;
        for (index, process) in registry.iter().enumerate() {
            if process.completed {
                continue;
            }
            // Strictly-less keeps the first process on ties
            if best.map_or(true, |(_, remaining)| process.remaining_time < remaining) {
                best = Some((index, process.remaining_time));
            }
        }
        best.map(|(index, _)| index)
    }

    fn name(&self) -> &'static str {
        "srtn"
    }
}
