/*!
 * SRTN Scheduling Simulator
 *
 * Preemptive Shortest-Remaining-Time-Next simulation core:
 * - Process registry with live runtime statistics
 * - Tick-driven scheduler engine with pause/resume/stop control
 * - Append-only execution trace for timeline rendering
 *
 * The presentation layer (table/Gantt rendering, input handling) is an
 * external consumer: it issues control commands and polls snapshots.
 */

pub mod core;
pub mod engine;
pub mod registry;
pub mod trace;

pub use crate::core::{ProcessId, RunState, SimResult, SimulationError, TimeUnit};
pub use engine::{
    Engine, EngineCommand, EngineConfig, EngineEvent, EngineTask, SelectionPolicy,
    ShortestRemaining, TickOutcome,
};
pub use registry::{Process, ProcessStatus, Registry};
pub use trace::{ExecutionStep, ExecutionTrace};
