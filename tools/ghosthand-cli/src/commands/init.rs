//! Write a template gesture script.

use std::path::PathBuf;

use ghosthand_pointer_model::{GestureScript, PointerSpec, ScriptCommand};

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    if path.exists() {
        anyhow::bail!("{} already exists", path.display());
    }

    let template = GestureScript {
        pointers: vec![PointerSpec::touch_at(100, 100)],
        commands: vec![
            ScriptCommand::Down {
                pointer: 0,
                delay_ms: 0,
            },
            ScriptCommand::MoveBy {
                pointer: 0,
                dx: 200,
                dy: 0,
                duration_ms: 400,
            },
            ScriptCommand::Up {
                pointer: 0,
                delay_ms: 50,
            },
        ],
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&path, template.to_json()?)?;

    println!("Wrote template script to {}", path.display());
    println!("Play it with: ghosthand play {}", path.display());
    Ok(())
}
