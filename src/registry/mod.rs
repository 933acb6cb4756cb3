/*!
 * Process Registry
 * Insertion-ordered process table, the single source of truth for
 * scheduling decisions and displayed statistics
 */

use crate::core::errors::SimResult;
use crate::core::types::{ProcessId, TimeUnit};
use log::info;

mod process;

pub use process::{Process, ProcessStatus};

/// Ordered collection of processes. Insertion order is preserved and is
/// the deterministic tie-break order for selection. Thread safety lives at
/// the engine's lock; this is a plain data structure.
#[derive(Debug, Default, Clone)]
pub struct Registry {
    processes: Vec<Process>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            processes: Vec::new(),
        }
    }

    /// Validate and append a process. The returned id is the process's
    /// registry index, stable for the whole run.
    pub(crate) fn add(
        &mut self,
        name: impl Into<String>,
        burst_time: i64,
        appearing_time: i64,
    ) -> SimResult<ProcessId> {
        let process = Process::new(name, burst_time, appearing_time)?;
        let id = self.processes.len();
        info!(
            "Process '{}' registered (burst: {}, appearing: {})",
            process.name, process.burst_time, process.appearing_time
        );
        self.processes.push(process);
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// True iff every process finished. An empty registry is never
    /// "all completed" - starting with zero processes is an input error.
    pub fn all_completed(&self) -> bool {
        !self.processes.is_empty() && self.processes.iter().all(|p| p.completed)
    }

    pub fn get(&self, id: ProcessId) -> Option<&Process> {
        self.processes.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Process> {
        self.processes.iter()
    }

    /// Copy of every process, safe to hand across threads
    pub fn snapshot(&self) -> Vec<Process> {
        self.processes.clone()
    }

    /// Total units executed across all processes. Equals the trace length
    /// at every observation point.
    pub fn executed_units(&self) -> TimeUnit {
        self.processes.iter().map(|p| p.executed_units()).sum()
    }

    /// Run `target` for one unit: deduct its remaining time, bill one unit
    /// of waiting to every other unfinished process, and latch completion
    /// together with the deduction.
    pub(crate) fn execute_unit(&mut self, target: ProcessId) {
        for (index, process) in self.processes.iter_mut().enumerate() {
            if process.completed {
                continue;
            }
            if index == target {
                debug_assert!(process.remaining_time > 0, "selected a finished process");
                process.remaining_time -= 1;
                if process.remaining_time == 0 {
                    process.completed = true;
                    process.turnaround_time = process.waiting_time + process.burst_time;
                    info!(
                        "Process '{}' completed (waiting: {}, turnaround: {})",
                        process.name, process.waiting_time, process.turnaround_time
                    );
                }
            } else {
                process.waiting_time += 1;
            }
        }
    }

    /// Re-arm every process for a fresh run
    pub(crate) fn reset_runtime(&mut self) {
        for process in &mut self.processes {
            process.reset_runtime();
        }
    }

    pub(crate) fn clear(&mut self) {
        self.processes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_assigns_sequential_ids() {
        let mut registry = Registry::new();
        assert_eq!(registry.add("A", 3, 0).unwrap(), 0);
        assert_eq!(registry.add("B", 5, 1).unwrap(), 1);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_add_rejects_bad_input() {
        let mut registry = Registry::new();
        assert!(registry.add("", 3, 0).is_err());
        assert!(registry.add("A", 0, 0).is_err());
        assert!(registry.add("A", 3, -1).is_err());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_empty_registry_is_not_all_completed() {
        let registry = Registry::new();
        assert!(!registry.all_completed());
    }

    #[test]
    fn test_execute_unit_updates_counters() {
        let mut registry = Registry::new();
        registry.add("A", 2, 0).unwrap();
        registry.add("B", 3, 0).unwrap();

        registry.execute_unit(0);
        assert_eq!(registry.get(0).unwrap().remaining_time, 1);
        assert_eq!(registry.get(0).unwrap().waiting_time, 0);
        assert_eq!(registry.get(1).unwrap().waiting_time, 1);
        assert_eq!(registry.executed_units(), 1);

        // Second unit completes A; turnaround fixed in the same step
        registry.execute_unit(0);
        let a = registry.get(0).unwrap();
        assert!(a.completed);
        assert_eq!(a.turnaround_time, 2);
        assert_eq!(registry.get(1).unwrap().waiting_time, 2);

        // Completed processes stop accumulating waiting time
        registry.execute_unit(1);
        assert_eq!(registry.get(0).unwrap().waiting_time, 0);
        assert!(!registry.all_completed());
    }

    #[test]
    fn test_reset_runtime_rearms_all() {
        let mut registry = Registry::new();
        registry.add("A", 1, 0).unwrap();
        registry.add("B", 1, 0).unwrap();
        registry.execute_unit(0);
        registry.execute_unit(1);
        assert!(registry.all_completed());

        registry.reset_runtime();
        assert!(!registry.all_completed());
        assert_eq!(registry.executed_units(), 0);
    }
}
