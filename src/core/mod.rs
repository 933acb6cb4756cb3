/*!
 * Core Module
 * Shared types and the error taxonomy
 */

pub mod errors;
pub mod types;

pub use errors::{SimResult, SimulationError};
pub use types::{ProcessId, RunState, TimeUnit};
