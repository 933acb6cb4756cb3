/*!
 * Engine Operations
 * Control protocol and the per-unit tick algorithm
 */

use super::{Engine, EngineEvent};
use crate::core::errors::{SimResult, SimulationError};
use crate::core::types::{ProcessId, RunState, TimeUnit};
use crate::trace::ExecutionStep;
use log::{info, trace, warn};

/// What a single tick did; the loop uses this to decide whether to keep
/// going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Engine is not running; the loop should exit
    Stopped,
    /// Engine is paused; nothing changed, no event was emitted
    Paused,
    /// One unit of simulated time was applied; the run continues
    Advanced,
    /// Every process finished this tick; terminal
    Completed,
}

impl Engine {
    /// Register a process. Rejected while a run is active.
    pub fn add_process(
        &self,
        name: impl Into<String>,
        burst_time: i64,
        appearing_time: i64,
    ) -> SimResult<ProcessId> {
        let mut shared = self.shared.write();
        if shared.run_state != RunState::NotRunning {
            return Err(SimulationError::State {
                operation: "add_process".to_string(),
                state: shared.run_state,
            });
        }
        shared.registry.add(name, burst_time, appearing_time)
    }

    /// Begin a run: clear the previous trace, re-arm every process's
    /// runtime counters, and transition to Running. The caller (or
    /// [`EngineTask`](super::EngineTask)) then drives `tick`.
    pub fn start(&self) -> SimResult<()> {
        let mut shared = self.shared.write();
        if shared.run_state != RunState::NotRunning {
            return Err(SimulationError::State {
                operation: "start".to_string(),
                state: shared.run_state,
            });
        }
        if shared.registry.is_empty() {
            return Err(SimulationError::EmptyInput);
        }

        shared.trace.clear();
        shared.registry.reset_runtime();
        shared.run_state = RunState::Running;

        info!(
            "Run started: {} processes, policy={}",
            shared.registry.len(),
            self.policy.name()
        );
        Ok(())
    }

    /// Running -> Paused. Idempotent; a no-op in any other state. Takes
    /// effect at the next tick boundary.
    pub fn pause(&self) {
        let mut shared = self.shared.write();
        if shared.run_state == RunState::Running {
            shared.run_state = RunState::Paused;
            info!("Engine paused");
        }
    }

    /// Paused -> Running. Idempotent; a no-op in any other state.
    pub fn resume(&self) {
        let mut shared = self.shared.write();
        if shared.run_state == RunState::Paused {
            shared.run_state = RunState::Running;
            info!("Engine resumed");
        }
    }

    /// Force NotRunning from any state. The registry and trace keep their
    /// last-applied values so final statistics stay inspectable; the next
    /// `start` clears them.
    pub fn stop(&self) {
        let mut shared = self.shared.write();
        if shared.run_state != RunState::NotRunning {
            shared.run_state = RunState::NotRunning;
            info!("Engine stopped after {} units", shared.trace.len());
        }
    }

    /// Wipe all processes and the trace. Only legal between runs.
    pub fn clear(&self) -> SimResult<()> {
        let mut shared = self.shared.write();
        if shared.run_state != RunState::NotRunning {
            return Err(SimulationError::State {
                operation: "clear".to_string(),
                state: shared.run_state,
            });
        }
        shared.registry.clear();
        shared.trace.clear();
        Ok(())
    }

    /// Advance simulated time by one unit.
    ///
    /// The whole step holds the write lock, so a concurrent snapshot never
    /// observes a half-applied tick. Events are emitted before the lock is
    /// released; a subscriber that receives one and then snapshots sees
    /// the mutation that produced it.
    pub fn tick(&self) -> TickOutcome {
        let mut shared = self.shared.write();

        match shared.run_state {
            RunState::NotRunning => return TickOutcome::Stopped,
            RunState::Paused => return TickOutcome::Paused,
            RunState::Running => {}
        }

        if shared.registry.all_completed() {
            shared.run_state = RunState::NotRunning;
            info!(
                "All processes completed after {} units",
                shared.trace.len()
            );
            let _ = self.events.send(EngineEvent::Completed);
            return TickOutcome::Completed;
        }

        match self.policy.select(&shared.registry) {
            Some(target) => {
                let time_unit = shared.trace.len() as TimeUnit;
                trace!("Unit {}: process {} selected", time_unit, target);
                shared.trace.append(ExecutionStep {
                    process_index: target,
                    time_unit,
                });
                shared.registry.execute_unit(target);
            }
            None => {
                // Cannot happen once all_completed was checked; skip the
                // unit rather than panic
                warn!("No runnable process selected; skipping unit");
            }
        }

        let _ = self.events.send(EngineEvent::Tick);
        TickOutcome::Advanced
    }
}
