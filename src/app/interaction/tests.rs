use super::*;
use crate::app::AppState;
use crate::core::{Building, Level};
use crate::shared::{AlignOptions, CursorShape, DrawIntent};
use approx::assert_relative_eq;
use std::f64::consts::FRAC_PI_2;

fn building() -> Building {
    Building::new(
        "B",
        vec![Level::new("L1", 100, 100), Level::new("L2", 100, 100)],
    )
}

fn state_without_origins() -> AppState {
    let options = AlignOptions {
        seed_default_origins: false,
        ..AlignOptions::default()
    };
    AppState::new(building(), options)
}

fn state_with_origins() -> AppState {
    AppState::new(building(), AlignOptions::default())
}

fn press(state: &mut AppState, view: ViewSlot, x: f64, y: f64, ctrl: bool) {
    handle_pointer(state, PointerEvent::press(view, DVec2::new(x, y), ctrl));
}

fn move_to(state: &mut AppState, view: ViewSlot, x: f64, y: f64) {
    handle_pointer(state, PointerEvent::moved(view, DVec2::new(x, y)));
}

fn release(state: &mut AppState, view: ViewSlot, x: f64, y: f64) {
    handle_pointer(state, PointerEvent::release(view, DVec2::new(x, y)));
}

/// Relation (1, 0) auf Level 1 bei (10, 10), Blick nach +X.
fn state_with_relative() -> AppState {
    let mut state = state_with_origins();
    assert!(state
        .store
        .add_relative(1, 0, "L1", DVec2::new(10.0, 10.0), DVec2::new(30.0, 10.0)));
    state
}

#[test]
fn test_ctrl_gesture_sets_origin() {
    let mut state = state_without_origins();

    press(&mut state, ViewSlot::First, 10.0, 10.0, true);
    assert!(state.session.is_clicked());
    assert_eq!(state.session.clicked_point(), Some(DVec2::new(10.0, 10.0)));
    assert_eq!(state.session.overlays().len(), 1);
    let pending_color = state.session.pending_color();
    assert!(pending_color.is_some());

    press(&mut state, ViewSlot::First, 20.0, 10.0, false);
    let info = state.store.origin(0).expect("Ursprung sollte gesetzt sein");
    assert_eq!(info.origin.position, DVec2::new(10.0, 10.0));
    assert_relative_eq!(info.origin.orientation, 0.0);
    assert_eq!(Some(info.color), pending_color);
    assert_eq!(info.level_name, "L1");

    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
    assert_eq!(state.revision, 1);
}

#[test]
fn test_both_origins_missing_notifies() {
    let mut state = state_without_origins();

    press(&mut state, ViewSlot::First, 10.0, 10.0, false);

    assert_eq!(
        state.ui.notification.as_deref(),
        Some(MSG_BOTH_ORIGINS_MISSING)
    );
    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert_eq!(state.store.origin_count(), 0);
    assert_eq!(state.store.relative_count(), 0);
}

#[test]
fn test_one_origin_missing_names_the_level() {
    let mut state = state_without_origins();
    press(&mut state, ViewSlot::First, 10.0, 10.0, true);
    press(&mut state, ViewSlot::First, 20.0, 10.0, false);

    press(&mut state, ViewSlot::First, 40.0, 40.0, false);

    let expected = missing_origin_message("L2");
    assert_eq!(state.ui.notification.as_deref(), Some(expected.as_str()));
    assert_ne!(expected, MSG_BOTH_ORIGINS_MISSING);
    assert_eq!(state.store.relative_count(), 0);
}

#[test]
fn test_missing_source_origin_names_the_source_level() {
    let mut state = state_without_origins();
    press(&mut state, ViewSlot::Second, 10.0, 10.0, true);
    press(&mut state, ViewSlot::Second, 20.0, 10.0, false);
    assert!(state.store.has_origin(1));
    assert!(!state.store.has_origin(0));

    press(&mut state, ViewSlot::First, 40.0, 40.0, false);

    let expected = missing_origin_message("L1");
    assert_eq!(state.ui.notification.as_deref(), Some(expected.as_str()));
    assert_ne!(expected, MSG_BOTH_ORIGINS_MISSING);
    assert_eq!(state.store.relative_count(), 0);
    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
}

#[test]
fn test_ctrl_flag_follows_last_event() {
    let mut state = state_without_origins();

    press(&mut state, ViewSlot::First, 10.0, 10.0, true);
    assert!(state.session.is_ctrl_pressed());

    move_to(&mut state, ViewSlot::First, 20.0, 10.0);
    assert!(!state.session.is_ctrl_pressed());

    // Ohne Strg wird die laufende Ursprungs-Geste trotzdem abgeschlossen
    press(&mut state, ViewSlot::First, 20.0, 10.0, false);
    assert!(state.store.has_origin(0));
}

#[test]
fn test_relative_gesture_with_preview() {
    let mut state = state_with_origins();
    let target_color = state.store.origin(0).map(|info| info.color);

    press(&mut state, ViewSlot::Second, 10.0, 10.0, false);
    assert_eq!(state.session.pending_color(), target_color);

    move_to(&mut state, ViewSlot::Second, 10.0, 30.0);
    let shapes: Vec<_> = state
        .session
        .overlays()
        .shapes_in(ViewSlot::Second)
        .cloned()
        .collect();
    assert_eq!(shapes.len(), 2);
    match &shapes[1] {
        DrawIntent::Axes { origin, angle, .. } => {
            assert_eq!(*origin, DVec2::new(10.0, 10.0));
            assert_relative_eq!(*angle, FRAC_PI_2);
        }
        other => panic!("Vorschau sollte Achsen zeigen, war {:?}", other),
    }

    // Weitere Bewegung aktualisiert die Vorschau statt neue anzulegen
    move_to(&mut state, ViewSlot::Second, 30.0, 10.0);
    assert_eq!(state.session.overlays().len(), 2);

    press(&mut state, ViewSlot::Second, 10.0, 30.0, false);
    let relative = state.store.relative(1, 0).expect("Relation sollte existieren");
    assert_eq!(relative.target_name, "L1");
    assert_eq!(relative.pose.position, DVec2::new(10.0, 10.0));
    assert_relative_eq!(relative.pose.orientation, FRAC_PI_2);

    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
    assert!(state.ui.notification.is_none());
}

#[test]
fn test_existing_relative_is_not_overwritten() {
    let mut state = state_with_relative();
    let revision = state.revision;

    press(&mut state, ViewSlot::Second, 80.0, 80.0, false);
    press(&mut state, ViewSlot::Second, 90.0, 80.0, false);

    let relative = state.store.relative(1, 0).expect("Relation");
    assert_eq!(relative.pose.position, DVec2::new(10.0, 10.0));
    assert_eq!(state.store.relative_count(), 1);
    assert_eq!(state.revision, revision);
    assert!(state.ui.notification.is_none());
}

#[test]
fn test_drag_moves_position_only() {
    let mut state = state_with_relative();

    press(&mut state, ViewSlot::Second, 11.0, 10.0, false);
    assert_eq!(state.session.mouse_status(), MouseStatus::MovePose);
    assert_eq!(state.session.overlays().len(), 1);

    move_to(&mut state, ViewSlot::Second, 50.0, 60.0);
    let pose = state.store.relative(1, 0).expect("Relation").pose;
    assert_eq!(pose.position, DVec2::new(50.0, 60.0));
    assert_relative_eq!(pose.orientation, 0.0);

    release(&mut state, ViewSlot::Second, 50.0, 60.0);
    assert_eq!(state.session.mouse_status(), MouseStatus::Idle);
    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
}

#[test]
fn test_drag_on_band_rotates_only() {
    let mut state = state_with_relative();

    press(&mut state, ViewSlot::Second, 25.0, 11.0, false);
    assert_eq!(state.session.mouse_status(), MouseStatus::RotatePose);

    move_to(&mut state, ViewSlot::Second, 10.0, 40.0);
    let pose = state.store.relative(1, 0).expect("Relation").pose;
    assert_eq!(pose.position, DVec2::new(10.0, 10.0));
    assert_relative_eq!(pose.orientation, FRAC_PI_2);

    release(&mut state, ViewSlot::Second, 10.0, 40.0);
    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
}

#[test]
fn test_leaving_both_views_resets_session() {
    let mut state = state_with_origins();
    press(&mut state, ViewSlot::First, 10.0, 10.0, false);
    move_to(&mut state, ViewSlot::First, 20.0, 10.0);
    assert!(state.session.label().is_some());

    handle_pointer(
        &mut state,
        PointerEvent {
            kind: PointerEventKind::Move,
            view: None,
            position: DVec2::ZERO,
            ctrl: false,
        },
    );

    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
    assert!(state.session.label().is_none());
    assert_eq!(state.store.relative_count(), 0);
}

#[test]
fn test_label_shows_metric_coordinates() {
    let mut state = state_without_origins();

    move_to(&mut state, ViewSlot::First, 10.0, 20.0);
    let label = state.session.label().expect("Label");
    assert_eq!(label.view, ViewSlot::First);
    assert_eq!(label.text, "x: 0.500 m\ny: -1.000 m");
    assert_eq!(label.anchor, DVec2::new(22.0, 8.0));

    // Mit Ursprung: Koordinaten relativ zum Ursprungs-Frame
    press(&mut state, ViewSlot::First, 10.0, 20.0, true);
    press(&mut state, ViewSlot::First, 30.0, 20.0, false);
    move_to(&mut state, ViewSlot::First, 30.0, 20.0);
    let label = state.session.label().expect("Label");
    assert_eq!(label.text, "x: 1.000 m\ny: 0.000 m");
}

#[test]
fn test_cursor_open_hand_over_relative() {
    let mut state = state_with_relative();

    move_to(&mut state, ViewSlot::Second, 11.0, 10.0);
    assert_eq!(state.session.cursor(), CursorShape::OpenHand);

    move_to(&mut state, ViewSlot::Second, 80.0, 80.0);
    assert_eq!(state.session.cursor(), CursorShape::Arrow);

    // Relation (1, 0) ist in der Ansicht von Level 0 nicht greifbar
    move_to(&mut state, ViewSlot::First, 11.0, 10.0);
    assert_eq!(state.session.cursor(), CursorShape::Arrow);
}

#[test]
fn test_ctrl_on_existing_origin_is_noop() {
    let mut state = state_with_origins();
    let origin = state.store.origin(0).cloned();

    press(&mut state, ViewSlot::First, 10.0, 10.0, true);

    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
    assert!(state.ui.notification.is_none());
    assert_eq!(state.store.origin(0).cloned(), origin);
}

#[test]
fn test_second_press_in_other_view_aborts() {
    let mut state = state_with_origins();

    press(&mut state, ViewSlot::First, 10.0, 10.0, false);
    press(&mut state, ViewSlot::Second, 20.0, 20.0, false);

    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.session.overlays().is_empty());
    assert_eq!(state.store.relative_count(), 0);
}

#[test]
fn test_same_level_in_both_views_creates_nothing() {
    let mut state = state_with_origins();
    state.view.set_level(ViewSlot::Second, 0);

    press(&mut state, ViewSlot::First, 10.0, 10.0, false);

    assert_eq!(*state.session.mode(), InteractionMode::Idle);
    assert!(state.ui.notification.is_none());
    assert_eq!(state.store.relative_count(), 0);
}
