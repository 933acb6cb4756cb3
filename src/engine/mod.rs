/*!
 * Scheduler Engine
 * Drives simulated time forward under the SRTN policy with
 * pause/resume/stop control and push notifications
 */

use crate::core::types::RunState;
use crate::registry::Registry;
use crate::trace::ExecutionTrace;
use log::info;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::broadcast;

mod events;
mod operations;
mod policy;
mod queries;
mod task;

pub use events::EngineEvent;
pub use operations::TickOutcome;
pub use policy::{SelectionPolicy, ShortestRemaining};
pub use task::{EngineCommand, EngineTask};

/// Engine configuration
#[derive(Debug, Clone, Copy)]
pub struct EngineConfig {
    /// Real-time length of one simulated unit (the reference pacing is 1s;
    /// tests run instant by calling `tick` directly)
    pub tick_interval: Duration,
    /// Capacity of the notification channel; lagging subscribers drop
    /// events rather than block the engine
    pub event_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_secs(1),
            event_capacity: 256,
        }
    }
}

/// Everything a tick reads and mutates, behind a single lock so each tick
/// is observably atomic: a concurrent snapshot can never see a trace entry
/// without the registry mutation that produced it.
#[derive(Debug, Default)]
struct Shared {
    registry: Registry,
    trace: ExecutionTrace,
    run_state: RunState,
}

/// Scheduler engine handle. Clone freely; all clones share one simulation.
pub struct Engine {
    shared: Arc<RwLock<Shared>>,
    policy: Arc<dyn SelectionPolicy>,
    events: broadcast::Sender<EngineEvent>,
    config: EngineConfig,
}

impl Engine {
    /// Create an engine with the SRTN policy and default pacing
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Create an engine with custom pacing
    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_policy(config, Arc::new(ShortestRemaining))
    }

    /// Create an engine with a custom selection policy
    pub fn with_policy(config: EngineConfig, policy: Arc<dyn SelectionPolicy>) -> Self {
        let (events, _) = broadcast::channel(config.event_capacity);

        info!(
            "Engine initialized: policy={}, tick interval={:?}",
            policy.name(),
            config.tick_interval
        );

        Self {
            shared: Arc::new(RwLock::new(Shared::default())),
            policy,
            events,
            config,
        }
    }

    /// Subscribe to tick/completion notifications
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.events.subscribe()
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }
}

impl Clone for Engine {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
            policy: Arc::clone(&self.policy),
            events: self.events.clone(),
            config: self.config,
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SimulationError;

    #[test]
    fn test_add_and_start() {
        let engine = Engine::new();
        assert_eq!(engine.add_process("P1", 3, 0).unwrap(), 0);
        assert_eq!(engine.add_process("P2", 2, 0).unwrap(), 1);

        engine.start().unwrap();
        assert_eq!(engine.run_state(), RunState::Running);
    }

    #[test]
    fn test_start_empty_fails() {
        let engine = Engine::new();
        assert_eq!(engine.start(), Err(SimulationError::EmptyInput));
        assert_eq!(engine.run_state(), RunState::NotRunning);
        assert!(engine.trace_snapshot().is_empty());
    }

    #[test]
    fn test_add_while_running_fails() {
        let engine = Engine::new();
        engine.add_process("P1", 3, 0).unwrap();
        engine.start().unwrap();

        assert!(matches!(
            engine.add_process("P2", 2, 0),
            Err(SimulationError::State { .. })
        ));
        assert_eq!(engine.process_count(), 1);
    }

    #[test]
    fn test_double_start_fails() {
        let engine = Engine::new();
        engine.add_process("P1", 3, 0).unwrap();
        engine.start().unwrap();
        assert!(matches!(
            engine.start(),
            Err(SimulationError::State { .. })
        ));
    }

    #[test]
    fn test_tick_runs_shortest_first() {
        let engine = Engine::new();
        engine.add_process("P1", 8, 0).unwrap();
        engine.add_process("P2", 4, 0).unwrap();
        engine.start().unwrap();

        assert_eq!(engine.tick(), TickOutcome::Advanced);
        let trace = engine.trace_snapshot();
        assert_eq!(trace[0].process_index, 1);
        assert_eq!(engine.process_snapshot()[1].remaining_time, 3);
    }

    #[test]
    fn test_tick_when_not_running() {
        let engine = Engine::new();
        engine.add_process("P1", 1, 0).unwrap();
        assert_eq!(engine.tick(), TickOutcome::Stopped);
    }

    #[test]
    fn test_run_to_completion() {
        let engine = Engine::new();
        engine.add_process("P1", 2, 0).unwrap();
        engine.add_process("P2", 1, 0).unwrap();
        engine.start().unwrap();

        assert_eq!(engine.tick(), TickOutcome::Advanced);
        assert_eq!(engine.tick(), TickOutcome::Advanced);
        assert_eq!(engine.tick(), TickOutcome::Advanced);
        assert_eq!(engine.tick(), TickOutcome::Completed);
        assert_eq!(engine.run_state(), RunState::NotRunning);
        assert!(engine.all_completed());
        assert_eq!(engine.trace_snapshot().len(), 3);
    }

    #[test]
    fn test_clear_only_when_stopped() {
        let engine = Engine::new();
        engine.add_process("P1", 2, 0).unwrap();
        engine.start().unwrap();
        assert!(engine.clear().is_err());

        engine.stop();
        engine.clear().unwrap();
        assert_eq!(engine.process_count(), 0);
        assert!(engine.trace_snapshot().is_empty());
    }
}
