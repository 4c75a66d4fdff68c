//! Zustandsübergänge der Pointer-State-Machine.

use super::hit_test::{pick_relative_pose, HitKind};
use super::session::{FloatingLabel, GestureKind, InteractionMode, PendingGesture, PoseGrab};
use super::{PointerEvent, PointerEventKind};
use crate::app::AppState;
use crate::core::{heading, pixel_to_metric, LevelColor};
use crate::shared::{CursorShape, DrawIntent, ViewSlot};
use glam::DVec2;

/// Meldung, wenn beide Levels noch keinen Ursprung haben.
pub const MSG_BOTH_ORIGINS_MISSING: &str =
    "Beide Ebenen brauchen zuerst einen Ursprung (Strg + Klick, dann Richtung klicken).";

/// Meldung, wenn genau ein Level noch keinen Ursprung hat.
pub fn missing_origin_message(level_name: &str) -> String {
    format!(
        "Ebene '{}' hat noch keinen Ursprung (Strg + Klick, dann Richtung klicken).",
        level_name
    )
}

/// Verarbeitet ein Pointer-Event synchron.
///
/// Außerhalb beider Ansichten wird der transiente Zustand verworfen.
/// Danach spiegelt der AppState sofort den neuen Stand wider.
pub fn handle_pointer(state: &mut AppState, event: PointerEvent) {
    let Some(view) = event.view else {
        state.session.reset();
        return;
    };

    state.session.is_ctrl_pressed = event.ctrl;

    match event.kind {
        PointerEventKind::Press => on_press(state, view, event.position),
        PointerEventKind::Move => on_move(state, view, event.position),
        PointerEventKind::Release => on_release(state),
    }

    update_floating_label(state, view, event.position);
    update_cursor(state, view, event.position);
}

// ── Press ───────────────────────────────────────────────────────────

fn on_press(state: &mut AppState, view: ViewSlot, pos: DVec2) {
    match state.session.mode {
        InteractionMode::Idle => begin_gesture(state, view, pos),
        InteractionMode::AwaitingOrientation(_) => commit_gesture(state, view, pos),
        // Während eines Drags ist die Taste bereits gedrückt
        InteractionMode::MovePose(_) | InteractionMode::RotatePose(_) => {}
    }
}

fn begin_gesture(state: &mut AppState, view: ViewSlot, pos: DVec2) {
    let acting = state.view.level(view);
    let paired = state.view.level(view.other());

    if state.building.level(acting).is_none() {
        return;
    }

    if let Some(hit) = pick_relative_pose(&state.store, acting, pos, &state.options) {
        begin_grab(state, view, hit.from, hit.to, hit.kind);
        return;
    }

    if state.session.is_ctrl_pressed() {
        if state.store.has_origin(acting) {
            log::debug!("Ursprung für Level {} existiert bereits", acting);
            return;
        }
        let color = state.colors.next_color();
        begin_pending(state, GestureKind::Origin, view, acting, pos, color);
        return;
    }

    let acting_has_origin = state.store.has_origin(acting);
    let paired_has_origin = state.store.has_origin(paired);
    match (acting_has_origin, paired_has_origin) {
        (true, true) => {}
        (false, false) => {
            notify(state, MSG_BOTH_ORIGINS_MISSING.to_string());
            return;
        }
        (false, true) => {
            let message = missing_origin_message(&level_name(state, acting));
            notify(state, message);
            return;
        }
        (true, false) => {
            let message = missing_origin_message(&level_name(state, paired));
            notify(state, message);
            return;
        }
    }

    if acting == paired {
        log::warn!("Beide Ansichten zeigen Level {}, keine Relation möglich", acting);
        return;
    }
    if state.store.has_relative(acting, paired) {
        log::debug!("Relation ({}, {}) existiert bereits", acting, paired);
        return;
    }

    let color = state
        .store
        .origin(paired)
        .map_or(LevelColor::NEUTRAL, |info| info.color);
    begin_pending(
        state,
        GestureKind::Relative {
            target_level: paired,
        },
        view,
        acting,
        pos,
        color,
    );
}

fn begin_grab(state: &mut AppState, view: ViewSlot, from: usize, to: usize, kind: HitKind) {
    let Some(position) = state.store.relative(from, to).map(|r| r.pose.position) else {
        return;
    };
    let shape = grab_handle_shape(state, position);
    let handle = state.session.overlays.create(view, shape);
    let grab = PoseGrab {
        view,
        from,
        to,
        handle,
    };
    state.session.mode = match kind {
        HitKind::Position => InteractionMode::MovePose(grab),
        HitKind::OrientationHandle => InteractionMode::RotatePose(grab),
    };
    log::debug!("{:?} auf Relation ({}, {})", state.session.mouse_status(), from, to);
}

fn begin_pending(
    state: &mut AppState,
    kind: GestureKind,
    view: ViewSlot,
    level: usize,
    pos: DVec2,
    color: LevelColor,
) {
    let marker = state.session.overlays.create(
        view,
        DrawIntent::Circle {
            center: pos,
            radius: state.options.marker_radius_px,
            color,
        },
    );
    state.session.mode = InteractionMode::AwaitingOrientation(PendingGesture {
        kind,
        view,
        level,
        clicked_point: pos,
        color,
        marker,
        preview: None,
    });
    log::debug!("{:?} gestartet auf Level {} bei {:?}", kind, level, pos);
}

fn commit_gesture(state: &mut AppState, view: ViewSlot, pos: DVec2) {
    let InteractionMode::AwaitingOrientation(gesture) = state.session.leave_mode() else {
        return;
    };

    if gesture.view != view {
        log::debug!("Geste abgebrochen: zweiter Klick in anderer Ansicht");
        return;
    }

    let committed = match gesture.kind {
        GestureKind::Origin => {
            let name = level_name(state, gesture.level);
            state.store.set_origin(
                gesture.level,
                &name,
                gesture.clicked_point,
                pos,
                gesture.color,
            )
        }
        GestureKind::Relative { target_level } => {
            let target_name = level_name(state, target_level);
            state.store.add_relative(
                gesture.level,
                target_level,
                &target_name,
                gesture.clicked_point,
                pos,
            )
        }
    };

    if committed {
        state.mark_changed();
        log::info!(
            "{:?} auf Level {} gesetzt: Position {:?}, Orientierung {:.3} rad",
            gesture.kind,
            gesture.level,
            gesture.clicked_point,
            heading(gesture.clicked_point, pos)
        );
    } else {
        log::debug!("{:?} verworfen: Eintrag existiert bereits", gesture.kind);
    }
}

// ── Move ────────────────────────────────────────────────────────────

fn on_move(state: &mut AppState, view: ViewSlot, pos: DVec2) {
    match state.session.mode {
        InteractionMode::AwaitingOrientation(gesture) if gesture.view == view => {
            let preview = DrawIntent::Axes {
                origin: gesture.clicked_point,
                angle: heading(gesture.clicked_point, pos),
                length: state.options.axis_length_px,
                color: gesture.color,
            };
            let preview_id = match gesture.preview {
                Some(id) => {
                    state.session.overlays.update(id, preview);
                    id
                }
                None => state.session.overlays.create(view, preview),
            };
            if let InteractionMode::AwaitingOrientation(pending) = &mut state.session.mode {
                pending.preview = Some(preview_id);
            }
        }
        InteractionMode::MovePose(grab) if grab.view == view => {
            if state.store.set_relative_position(grab.from, grab.to, pos) {
                let shape = grab_handle_shape(state, pos);
                state.session.overlays.update(grab.handle, shape);
                state.mark_changed();
            }
        }
        InteractionMode::RotatePose(grab) if grab.view == view => {
            let Some(relative) = state.store.relative(grab.from, grab.to) else {
                return;
            };
            let position = relative.pose.position;
            let orientation = relative.pose.heading_to(pos);
            if state
                .store
                .set_relative_orientation(grab.from, grab.to, orientation)
            {
                let shape = grab_handle_shape(state, position);
                state.session.overlays.update(grab.handle, shape);
                state.mark_changed();
            }
        }
        _ => {}
    }
}

// ── Release ─────────────────────────────────────────────────────────

fn on_release(state: &mut AppState) {
    if matches!(
        state.session.mode,
        InteractionMode::MovePose(_) | InteractionMode::RotatePose(_)
    ) {
        log::debug!("{:?} beendet", state.session.mouse_status());
        state.session.leave_mode();
    }
}

// ── Feedback ────────────────────────────────────────────────────────

fn update_floating_label(state: &mut AppState, view: ViewSlot, pos: DVec2) {
    let level = state.view.level(view);
    let Some(level_info) = state.building.level(level) else {
        state.session.label = None;
        return;
    };

    let meters_per_pixel = state.building.meters_per_pixel(&level_info.name);
    let reference = state.store.origin(level).map(|info| &info.origin);
    let metric = pixel_to_metric(pos, reference, meters_per_pixel);

    state.session.label = Some(FloatingLabel {
        view,
        anchor: pos + DVec2::from(state.options.label_offset_px),
        text: format!("x: {:.3} m\ny: {:.3} m", metric.x, metric.y),
    });
}

fn update_cursor(state: &mut AppState, view: ViewSlot, pos: DVec2) {
    state.session.cursor = match state.session.mode {
        InteractionMode::MovePose(_) | InteractionMode::RotatePose(_) => CursorShape::OpenHand,
        InteractionMode::AwaitingOrientation(_) => CursorShape::Arrow,
        InteractionMode::Idle => {
            let level = state.view.level(view);
            if pick_relative_pose(&state.store, level, pos, &state.options).is_some() {
                CursorShape::OpenHand
            } else {
                CursorShape::Arrow
            }
        }
    };
}

// ── Hilfsfunktionen ─────────────────────────────────────────────────

fn notify(state: &mut AppState, message: String) {
    log::warn!("{}", message);
    state.ui.notification = Some(message);
}

fn level_name(state: &AppState, level: usize) -> String {
    state
        .building
        .level(level)
        .map(|l| l.name.clone())
        .unwrap_or_else(|| format!("#{}", level))
}

fn grab_handle_shape(state: &AppState, position: DVec2) -> DrawIntent {
    DrawIntent::Circle {
        center: position,
        radius: state.options.hit_radius_px,
        color: LevelColor::NEUTRAL,
    }
}
