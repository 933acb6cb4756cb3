/*!
 * Engine Task - Autonomous Tick Loop
 *
 * Background task that advances simulated time at a fixed real-time pace,
 * independent of the presentation side issuing control commands. The
 * engine itself stays timer-agnostic; tests drive `Engine::tick` directly.
 */

use super::{Engine, TickOutcome};
use crate::core::errors::SimResult;
use log::{info, warn};
use tokio::sync::mpsc;

/// Control messages for the engine task
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// Pause the simulation at the next tick boundary
    Pause,
    /// Resume a paused simulation
    Resume,
    /// Apply one tick immediately, off the timer
    Trigger,
    /// Stop the run and exit the loop
    Shutdown,
}

/// Handle to the background tick loop
pub struct EngineTask {
    command_tx: mpsc::UnboundedSender<EngineCommand>,
    handle: Option<tokio::task::JoinHandle<()>>,
}

impl EngineTask {
    /// Start the run and spawn the loop pacing it at the configured
    /// interval. Fails like [`Engine::start`] (empty registry, bad state);
    /// on failure nothing is spawned.
    pub fn run(engine: Engine) -> SimResult<Self> {
        engine.start()?;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let interval = engine.config().tick_interval;

        let handle = tokio::spawn(async move {
            run_tick_loop(engine, command_rx).await;
        });

        info!("Engine task spawned ({:?} per simulated unit)", interval);

        Ok(Self {
            command_tx,
            handle: Some(handle),
        })
    }

    /// Pause automatic ticking
    pub fn pause(&self) {
        let _ = self.command_tx.send(EngineCommand::Pause);
    }

    /// Resume automatic ticking
    pub fn resume(&self) {
        let _ = self.command_tx.send(EngineCommand::Resume);
    }

    /// Apply one tick immediately
    pub fn trigger(&self) {
        let _ = self.command_tx.send(EngineCommand::Trigger);
    }

    /// Stop the run and wait for the loop to exit
    pub async fn shutdown(mut self) {
        let _ = self.command_tx.send(EngineCommand::Shutdown);

        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Engine task shutdown error: {}", e);
            } else {
                info!("Engine task shutdown complete");
            }
        }
    }

    /// Wait for the run to finish on its own (completion or stop)
    pub async fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.await {
                warn!("Engine task join error: {}", e);
            }
        }
    }
}

/// Core tick loop: one simulated unit per interval tick, until the run
/// completes or is stopped
async fn run_tick_loop(engine: Engine, mut command_rx: mpsc::UnboundedReceiver<EngineCommand>) {
    let mut interval = tokio::time::interval(engine.config().tick_interval);
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            _ = interval.tick() => {
                match engine.tick() {
                    TickOutcome::Completed | TickOutcome::Stopped => break,
                    TickOutcome::Advanced | TickOutcome::Paused => {}
                }
            }

            cmd = command_rx.recv() => {
                match cmd {
                    Some(EngineCommand::Pause) => engine.pause(),
                    Some(EngineCommand::Resume) => engine.resume(),
                    Some(EngineCommand::Trigger) => {
                        if matches!(
                            engine.tick(),
                            TickOutcome::Completed | TickOutcome::Stopped
                        ) {
                            break;
                        }
                    }
                    Some(EngineCommand::Shutdown) | None => {
                        engine.stop();
                        break;
                    }
                }
            }
        }
    }

    info!("Engine tick loop exited");
}

impl Drop for EngineTask {
    fn drop(&mut self) {
        // Ask the loop to stop if the handle was never awaited
        if self.handle.is_some() {
            let _ = self.command_tx.send(EngineCommand::Shutdown);
        }
    }
}
