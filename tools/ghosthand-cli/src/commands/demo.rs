//! Built-in demo gestures.

use std::path::PathBuf;

use ghosthand_pointer_model::{GestureScript, PointerSpec, ScriptCommand};

use super::play::play_script;

pub async fn run(
    name: String,
    output: PathBuf,
    timing: String,
    interval_ms: Option<u64>,
) -> anyhow::Result<()> {
    let script = match name.as_str() {
        "tap" => tap(),
        "drag" => drag(),
        "pinch" => pinch(),
        other => anyhow::bail!("Unknown demo '{other}' (expected tap, drag, or pinch)"),
    };
    play_script(&script, output, &timing, interval_ms).await
}

fn tap() -> GestureScript {
    GestureScript {
        pointers: vec![PointerSpec::touch_at(100, 100)],
        commands: vec![
            ScriptCommand::Down {
                pointer: 0,
                delay_ms: 0,
            },
            ScriptCommand::Up {
                pointer: 0,
                delay_ms: 80,
            },
        ],
    }
}

fn drag() -> GestureScript {
    GestureScript {
        pointers: vec![PointerSpec::touch_at(100, 400)],
        commands: vec![
            ScriptCommand::Down {
                pointer: 0,
                delay_ms: 0,
            },
            ScriptCommand::MoveTo {
                pointer: 0,
                x: 500,
                y: 400,
                duration_ms: 600,
            },
            ScriptCommand::Up {
                pointer: 0,
                delay_ms: 50,
            },
        ],
    }
}

fn pinch() -> GestureScript {
    GestureScript {
        pointers: vec![
            PointerSpec::touch_at(300, 300),
            PointerSpec::touch_at(500, 500),
        ],
        commands: vec![
            ScriptCommand::Down {
                pointer: 0,
                delay_ms: 0,
            },
            ScriptCommand::Down {
                pointer: 1,
                delay_ms: 0,
            },
            ScriptCommand::Sync { delay_ms: 60 },
            ScriptCommand::MoveBy {
                pointer: 0,
                dx: -80,
                dy: -80,
                duration_ms: 500,
            },
            ScriptCommand::MoveBy {
                pointer: 1,
                dx: 80,
                dy: 80,
                duration_ms: 500,
            },
            ScriptCommand::Up {
                pointer: 0,
                delay_ms: 0,
            },
            ScriptCommand::Up {
                pointer: 1,
                delay_ms: 0,
            },
        ],
    }
}
