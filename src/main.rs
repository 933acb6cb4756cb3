/*!
 * SRTN Simulator - Demo Driver
 *
 * Stdout stand-in for the presentation layer: seeds the reference process
 * set, runs the engine to completion, and prints the statistics table and
 * execution timeline.
 */

use srtn_sim::{Engine, EngineConfig, EngineEvent, EngineTask};
use std::error::Error;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let engine = Engine::with_config(EngineConfig {
        tick_interval: Duration::from_millis(100),
        ..Default::default()
    });

    engine.add_process("Process 1", 8, 2)?;
    engine.add_process("Process 2", 4, 0)?;
    engine.add_process("Process 3", 6, 1)?;

    let mut events = engine.subscribe();
    let task = EngineTask::run(engine.clone())?;

    while let Ok(event) = events.recv().await {
        if event == EngineEvent::Completed {
            break;
        }
    }
    task.join().await;

    let processes = engine.process_snapshot();

    if std::env::args().any(|arg| arg == "--json") {
        println!("{}", serde_json::to_string_pretty(&processes)?);
        return Ok(());
    }

    println!(
        "{:<12} {:>6} {:>10} {:>10} {:>8} {:>11}  {}",
        "Name", "Burst", "Appearing", "Remaining", "Waiting", "Turnaround", "Status"
    );
    for process in &processes {
        println!(
            "{:<12} {:>6} {:>10} {:>10} {:>8} {:>11}  {}",
            process.name,
            process.burst_time,
            process.appearing_time,
            process.remaining_time,
            process.waiting_time,
            process.turnaround_time,
            process.status().as_str()
        );
    }

    println!("\nTimeline ({} units):", engine.max_time_unit());
    for step in engine.trace_snapshot() {
        println!("  t{:>2}: {}", step.time_unit, processes[step.process_index].name);
    }

    Ok(())
}
