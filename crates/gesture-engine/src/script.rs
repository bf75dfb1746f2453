//! Turns a [`GestureScript`] into queued movements on a dispatcher.

use ghosthand_common::error::{GhosthandError, GhosthandResult};
use ghosthand_pointer_model::{GestureScript, PointerId, ScriptCommand, StateDelta};

use crate::dispatcher::Dispatcher;

/// Create the script's pointers on `dispatcher` and queue every command.
///
/// Returns the created pointer ids, index-aligned with the script's
/// declarations. With the instant strategy the whole gesture plays out
/// during this call; otherwise the caller drives the dispatcher
/// afterwards (`run_until_idle` or `pump`).
pub fn run_script(
    dispatcher: &mut Dispatcher,
    script: &GestureScript,
) -> GhosthandResult<Vec<PointerId>> {
    let problems = script.validate();
    if !problems.is_empty() {
        return Err(GhosthandError::script(problems.join("; ")));
    }

    let ids: Vec<PointerId> = script
        .pointers
        .iter()
        .map(|spec| dispatcher.create_point(*spec))
        .collect();

    for command in &script.commands {
        apply_command(dispatcher, &ids, command)?;
    }

    tracing::debug!(
        pointers = ids.len(),
        commands = script.commands.len(),
        "Script queued"
    );
    Ok(ids)
}

fn handle_for<'a>(
    dispatcher: &'a mut Dispatcher,
    ids: &[PointerId],
    pointer: usize,
) -> GhosthandResult<crate::dispatcher::PointHandle<'a>> {
    dispatcher
        .point(ids[pointer])
        .ok_or_else(|| GhosthandError::script(format!("unknown pointer index {pointer}")))
}

fn apply_command(
    dispatcher: &mut Dispatcher,
    ids: &[PointerId],
    command: &ScriptCommand,
) -> GhosthandResult<()> {
    match *command {
        ScriptCommand::Down { pointer, delay_ms } => {
            handle_for(dispatcher, ids, pointer)?.down_after(delay_ms);
        }
        ScriptCommand::Up { pointer, delay_ms } => {
            handle_for(dispatcher, ids, pointer)?.up_after(delay_ms);
        }
        ScriptCommand::MoveTo {
            pointer,
            x,
            y,
            duration_ms,
        } => {
            handle_for(dispatcher, ids, pointer)?.move_to(x, y, duration_ms);
        }
        ScriptCommand::MoveBy {
            pointer,
            dx,
            dy,
            duration_ms,
        } => {
            handle_for(dispatcher, ids, pointer)?.move_by(dx, dy, duration_ms);
        }
        ScriptCommand::Wait { pointer, delay_ms } => {
            handle_for(dispatcher, ids, pointer)?.wait(delay_ms);
        }
        ScriptCommand::WaitUntil { pointer, at_ms } => {
            handle_for(dispatcher, ids, pointer)?.wait_until(at_ms);
        }
        ScriptCommand::Set {
            pointer,
            pressure,
            tilt_x,
            tilt_y,
            width,
            height,
            delay_ms,
        } => {
            let delta = StateDelta {
                pressure,
                tilt_x,
                tilt_y,
                width,
                height,
                ..StateDelta::default()
            };
            handle_for(dispatcher, ids, pointer)?.update(delta, delay_ms);
        }
        ScriptCommand::Sync { delay_ms } => dispatcher.sync(delay_ms),
    }
    Ok(())
}
