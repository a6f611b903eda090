use super::*;
use crate::config::Config;
use crate::draw::color::{BLUE, GREEN, RED};
use crate::input::events::PointerEvent;
use crate::input::tool::{ShapeKind, ToolKind};
use crate::util::Point;

fn draw_line(state: &mut InputState, y: f64) {
    state.on_pointer_down(Point::new(0.0, y), Some(0.5));
    state.on_pointer_move(Point::new(10.0, y), Some(0.5));
    state.on_pointer_up(Point::new(20.0, y), Some(0.5));
}

#[test]
fn completed_gesture_commits_exactly_one_snapshot() {
    let mut state = InputState::new();
    let before = state.history().with(|h| h.len());

    draw_line(&mut state, 5.0);

    assert_eq!(state.history().with(|h| h.len()), before + 1);
    let snapshot = state.visible_snapshot();
    assert_eq!(snapshot.len(), 1);
    let stroke = snapshot.strokes().next().unwrap();
    assert_eq!(stroke.len(), 3);
    assert_eq!(stroke.points().len(), stroke.pressures().len());
    assert!(state.provisional_stroke().is_none());
}

#[test]
fn moves_do_not_touch_history() {
    let mut state = InputState::new();
    state.on_pointer_down(Point::new(0.0, 0.0), None);
    state.on_pointer_move(Point::new(1.0, 1.0), None);
    state.on_pointer_move(Point::new(2.0, 2.0), None);

    assert!(!state.can_undo());
    assert!(state.visible_snapshot().is_empty());
    let provisional = state.provisional_stroke().unwrap();
    assert_eq!(provisional.len(), 3);
}

#[test]
fn pressureless_device_records_the_floor() {
    let mut state = InputState::new();
    state.on_pointer_down(Point::new(0.0, 0.0), None);
    state.on_pointer_move(Point::new(5.0, 0.0), Some(0.0));
    state.on_pointer_up(Point::new(9.0, 0.0), None);

    let snapshot = state.visible_snapshot();
    let stroke = snapshot.strokes().next().unwrap();
    assert!(stroke.pressures().iter().all(|&p| p == 0.3));
}

#[test]
fn style_is_captured_at_gesture_start() {
    let mut state = InputState::new();
    state.set_color(BLUE);
    state.on_pointer_down(Point::new(0.0, 0.0), Some(1.0));
    state.set_color(GREEN);
    state.adjust_thickness(10.0);
    state.on_pointer_up(Point::new(4.0, 4.0), Some(1.0));

    let snapshot = state.visible_snapshot();
    let stroke = snapshot.strokes().next().unwrap();
    assert_eq!(stroke.color, BLUE);
    assert_eq!(stroke.line_width, Config::default().tools.pen.width);
}

#[test]
fn new_gesture_supersedes_unfinished_one() {
    let mut state = InputState::new();
    state.on_pointer_down(Point::new(0.0, 0.0), None);
    state.on_pointer_move(Point::new(3.0, 0.0), None);

    state.set_tool(ToolKind::Marker);
    state.on_pointer_down(Point::new(50.0, 50.0), None);
    state.on_pointer_up(Point::new(60.0, 50.0), None);

    let snapshot = state.visible_snapshot();
    assert_eq!(snapshot.len(), 1);
    let stroke = snapshot.strokes().next().unwrap();
    assert_eq!(stroke.tool, ToolKind::Marker);
    assert_eq!(stroke.points()[0], Point::new(50.0, 50.0));
}

#[test]
fn up_without_down_commits_nothing() {
    let mut state = InputState::new();
    assert!(state.on_pointer_up(Point::new(5.0, 5.0), None).is_none());
    assert!(state.visible_snapshot().is_empty());
    assert!(!state.can_undo());

    draw_line(&mut state, 10.0);
    assert!(state.on_pointer_up(Point::new(5.0, 5.0), None).is_none());
    assert_eq!(state.history().with(|h| h.len()), 2);
}

#[test]
fn up_at_the_last_move_position_is_not_duplicated() {
    let mut state = InputState::new();
    state.on_pointer_down(Point::new(0.0, 0.0), None);
    state.on_pointer_move(Point::new(8.0, 0.0), None);
    state.on_pointer_up(Point::new(8.0, 0.0), None);

    assert_eq!(state.visible_snapshot().strokes().next().unwrap().len(), 2);
}

#[test]
fn three_gestures_two_undos() {
    let mut state = InputState::new();
    draw_line(&mut state, 0.0);
    let first = state.visible_snapshot();
    draw_line(&mut state, 10.0);
    draw_line(&mut state, 20.0);

    assert!(state.undo());
    assert!(state.undo());
    assert_eq!(state.visible_snapshot(), first);
    assert!(state.can_redo());

    assert!(state.redo());
    assert_eq!(state.visible_snapshot().len(), 2);
}

#[test]
fn clear_then_undo_restores_strokes() {
    let mut state = InputState::new();
    draw_line(&mut state, 0.0);
    draw_line(&mut state, 10.0);
    let two = state.visible_snapshot();

    state.clear();
    assert!(state.visible_snapshot().is_empty());

    state.undo();
    assert_eq!(state.visible_snapshot(), two);
}

#[test]
fn shape_strokes_share_style_and_keep_their_kind() {
    let mut state = InputState::new();
    state.set_tool(ToolKind::Shape(ShapeKind::Circle));
    state.set_color(RED);
    state.set_filled(true);

    state.set_tool(ToolKind::Shape(ShapeKind::Cube));
    assert_eq!(state.current_style().color, RED);

    state.on_pointer_down(Point::new(0.0, 0.0), None);
    state.on_pointer_up(Point::new(40.0, 40.0), None);
    state.set_tool(ToolKind::Shape(ShapeKind::Circle));
    state.on_pointer_down(Point::new(0.0, 0.0), None);
    state.on_pointer_up(Point::new(40.0, 40.0), None);

    let snapshot = state.visible_snapshot();
    let strokes: Vec<_> = snapshot.strokes().collect();
    assert_eq!(strokes[0].shape_kind(), Some(ShapeKind::Cube));
    assert!(!strokes[0].filled, "only closed shapes are filled");
    assert_eq!(strokes[1].shape_kind(), Some(ShapeKind::Circle));
    assert!(strokes[1].filled);
}

#[test]
fn thickness_adjustment_is_clamped() {
    let mut state = InputState::new();
    state.adjust_thickness(-1000.0);
    assert_eq!(state.current_style().line_width, 0.5);
    state.adjust_thickness(5000.0);
    assert_eq!(state.current_style().line_width, 100.0);
}

#[test]
fn opacity_is_clamped() {
    let mut state = InputState::new();
    state.set_tool(ToolKind::Marker);
    state.set_opacity(1.7);
    assert_eq!(state.current_style().opacity, 1.0);
}

#[test]
fn pointer_events_replay_a_gesture() {
    let mut state = InputState::new();
    let samples = [
        (Point::new(0.0, 0.0), Some(0.4)),
        (Point::new(5.0, 5.0), Some(0.6)),
        (Point::new(10.0, 0.0), Some(0.8)),
    ];

    let ids: Vec<_> = PointerEvent::gesture(&samples)
        .into_iter()
        .filter_map(|event| state.handle_pointer(event))
        .collect();

    assert_eq!(ids.len(), 1);
    let snapshot = state.visible_snapshot();
    assert_eq!(snapshot.strokes().next().unwrap().id(), ids[0]);
}

#[test]
fn single_sample_gesture_is_a_dot() {
    let events = PointerEvent::gesture(&[(Point::new(3.0, 4.0), None)]);
    assert_eq!(events.len(), 2);
    assert!(matches!(events[1], PointerEvent::Up { .. }));

    let mut state = InputState::new();
    for event in events {
        state.handle_pointer(event);
    }
    assert_eq!(state.visible_snapshot().strokes().next().unwrap().len(), 1);
}

#[test]
fn non_finite_positions_are_ignored() {
    let mut state = InputState::new();
    state.on_pointer_down(Point::new(f64::NAN, 0.0), None);
    assert!(state.provisional_stroke().is_none());
}

#[test]
fn states_can_share_one_history() {
    let config = Config::default();
    let a = InputState::from_config(&config);
    let mut b = InputState::with_history(&config, a.history().clone());

    draw_line(&mut b, 0.0);
    assert!(a.can_undo());
    assert_eq!(a.visible_snapshot().len(), 1);
}
