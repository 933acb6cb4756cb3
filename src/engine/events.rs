/*!
 * Engine Events
 * Push notifications for the presentation boundary
 */

use serde::{Deserialize, Serialize};

/// Notification pushed to subscribers. Events carry no payload beyond
/// "state changed, re-read the snapshot"; a receiver that sees an event and
/// then snapshots is guaranteed to observe the mutation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineEvent {
    /// A tick was applied; statistics and trace may have changed
    Tick,
    /// All processes finished; the run is over
    Completed,
}
