/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::RunState;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Common result type for simulator operations
pub type SimResult<T> = Result<T, SimulationError>;

/// Caller-facing errors; all are local and recoverable.
///
/// Invariant violations inside the tick algorithm are programming defects
/// and assert instead of surfacing here.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SimulationError {
    #[error("Invalid process input: {0}")]
    #[diagnostic(
        code(simulation::validation),
        help("Process name must be non-empty, burst time positive, appearing time non-negative.")
    )]
    Validation(String),

    #[error("Operation '{operation}' not allowed while engine is {state}")]
    #[diagnostic(
        code(simulation::state),
        help("Stop the current run before modifying the registry or starting again.")
    )]
    State {
        operation: String,
        state: RunState,
    },

    #[error("No processes registered")]
    #[diagnostic(
        code(simulation::empty_input),
        help("Add at least one process before starting the engine.")
    )]
    EmptyInput,
}
