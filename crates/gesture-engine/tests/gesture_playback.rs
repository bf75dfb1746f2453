//! End-to-end playback of a scripted two-finger pinch.

use ghosthand_common::clock::{Clock, ManualClock};
use ghosthand_common::config::TimingConfig;
use ghosthand_gesture_engine::surface::NullMarkerProvider;
use ghosthand_gesture_engine::{run_script, Dispatcher, GesturePhase, RecordingSurface};
use ghosthand_pointer_model::{GestureScript, PointerEventKind, PointerSpec, ScriptCommand};

fn pinch_script() -> GestureScript {
    GestureScript {
        pointers: vec![
            PointerSpec::touch_at(200, 200),
            PointerSpec::touch_at(400, 400),
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
            // Both fingers start moving together after a settle delay
            ScriptCommand::Sync { delay_ms: 100 },
            ScriptCommand::MoveBy {
                pointer: 0,
                dx: -50,
                dy: -50,
                duration_ms: 500,
            },
            ScriptCommand::MoveBy {
                pointer: 1,
                dx: 50,
                dy: 50,
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

#[test]
fn pinch_playback_coordinates_both_fingers() {
    let clock = ManualClock::new();
    let surface = RecordingSurface::new();
    let mut dispatcher = Dispatcher::new(
        TimingConfig::FixedInterval { interval_ms: 16 },
        Box::new(clock.clone()),
        Box::new(surface.clone()),
        Box::new(NullMarkerProvider),
    );

    let ids = run_script(&mut dispatcher, &pinch_script()).unwrap();
    assert_eq!(ids, vec![1, 2]);

    // Sync aligned both timelines before the pinch legs were queued
    let until_a = dispatcher.get(ids[0]).unwrap().moves_until();
    let until_b = dispatcher.get(ids[1]).unwrap().moves_until();
    assert_eq!(until_a, until_b);

    let mut steps = 0;
    while dispatcher.is_active() {
        clock.advance(16);
        dispatcher.pump(clock.now_ms());
        steps += 1;
        assert!(steps < 1000, "playback never finished");
    }

    // One continuous gesture: a single start/stop cycle
    let phases = surface.phases();
    assert_eq!(phases.first(), Some(&GesturePhase::Started));
    assert_eq!(phases.last(), Some(&GesturePhase::Stopped));
    assert_eq!(
        phases.iter().filter(|p| **p == GesturePhase::Started).count(),
        1
    );
    assert_eq!(
        phases.iter().filter(|p| **p == GesturePhase::Stopped).count(),
        1
    );

    let events = surface.events();

    // Both fingers went down first, in creation order
    assert_eq!(events[0].kind, PointerEventKind::Down);
    assert_eq!(events[0].pointer_id, 1);
    assert_eq!(events[1].kind, PointerEventKind::Down);
    assert_eq!(events[1].pointer_id, 2);

    // Only the first-created contact is primary
    assert!(events
        .iter()
        .all(|e| e.is_primary == (e.pointer_id == 1)));

    // Each finger ends released at its pinch target
    let last_a = events.iter().rev().find(|e| e.pointer_id == 1).unwrap();
    let last_b = events.iter().rev().find(|e| e.pointer_id == 2).unwrap();
    assert_eq!(last_a.kind, PointerEventKind::Up);
    assert_eq!(last_a.position(), (150, 150));
    assert_eq!(last_b.kind, PointerEventKind::Up);
    assert_eq!(last_b.position(), (450, 450));

    // Fingers moved in opposite directions between the shared timestamps
    let moves_a: Vec<_> = events
        .iter()
        .filter(|e| e.pointer_id == 1 && e.kind == PointerEventKind::Move)
        .collect();
    assert!(!moves_a.is_empty());
    assert!(moves_a.windows(2).all(|w| w[1].x <= w[0].x));
}

#[test]
fn missed_deadlines_collapse_into_one_catchup_event() {
    let clock = ManualClock::new();
    let surface = RecordingSurface::new();
    let mut dispatcher = Dispatcher::new(
        TimingConfig::FixedInterval { interval_ms: 16 },
        Box::new(clock.clone()),
        Box::new(surface.clone()),
        Box::new(NullMarkerProvider),
    );

    let id = dispatcher.create_point(PointerSpec::touch_at(0, 0));
    dispatcher.point(id).unwrap().down().move_by(100, 0, 400).up();

    // Miss every deadline, then catch up in one bulk flush. The whole
    // down-move-up timeline merges: pressed went false to false, only
    // the position survives as a single move.
    clock.advance(1_000);
    dispatcher.pump(clock.now_ms());

    assert!(!dispatcher.is_active());
    assert_eq!(surface.events().len(), 1);
    let last = surface.events().last().cloned().unwrap();
    assert_eq!(last.kind, PointerEventKind::Move);
    assert_eq!(last.position(), (100, 0));
}
