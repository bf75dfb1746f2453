//! Play a gesture script to a JSONL event stream.

use std::path::PathBuf;

use ghosthand_common::clock::MonotonicClock;
use ghosthand_common::config::TimingConfig;
use ghosthand_gesture_engine::surface::NullMarkerProvider;
use ghosthand_gesture_engine::{run_script, Dispatcher, GestureStreamHeader, JsonlSurface};
use ghosthand_pointer_model::{parse_events, GestureScript};

pub async fn run(
    script_path: PathBuf,
    output: PathBuf,
    timing: String,
    interval_ms: Option<u64>,
) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&script_path)
        .map_err(|e| anyhow::anyhow!("Failed to read script {}: {e}", script_path.display()))?;
    let script = GestureScript::from_json(&json)
        .map_err(|e| anyhow::anyhow!("Failed to parse script: {e}"))?;

    play_script(&script, output, &timing, interval_ms).await
}

/// Shared playback path for `play` and `demo`.
pub async fn play_script(
    script: &GestureScript,
    output: PathBuf,
    timing: &str,
    interval_ms: Option<u64>,
) -> anyhow::Result<()> {
    let timing = TimingConfig::from_name(timing, interval_ms);
    let clock = MonotonicClock::start();
    let header = GestureStreamHeader::new(clock.epoch_wall(), timing.name());
    let surface = JsonlSurface::create(output.clone(), &header)?;

    let mut dispatcher = Dispatcher::new(
        timing,
        Box::new(clock),
        Box::new(surface),
        Box::new(NullMarkerProvider),
    );

    println!(
        "Playing {} pointer(s), {} command(s) with {} timing",
        script.pointers.len(),
        script.commands.len(),
        timing.name()
    );

    let ids = run_script(&mut dispatcher, script)
        .map_err(|e| anyhow::anyhow!("Failed to queue script: {e}"))?;
    dispatcher.run_until_idle().await;
    tracing::info!(pointers = ids.len(), "Playback finished");

    // The surface lives inside the dispatcher; count what landed on disk.
    let content = std::fs::read_to_string(&output)?;
    let events = parse_events(&content)?;
    println!("Wrote {} event(s) to {}", events.len(), output.display());

    Ok(())
}
