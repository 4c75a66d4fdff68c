//! Builder für Render-Szenen aus dem AppState.

use crate::app::AppState;
use crate::core::LevelColor;
use crate::shared::{AlignScene, DrawIntent, ViewScene, ViewSlot};

/// Baut eine AlignScene aus dem aktuellen AppState.
pub fn build(state: &AppState) -> AlignScene {
    let mut scene = AlignScene {
        cursor: state.session.cursor(),
        notification: state.ui.notification.clone(),
        ..AlignScene::default()
    };

    for slot in ViewSlot::ALL {
        *scene.view_mut(slot) = build_view(state, slot);
    }
    scene
}

fn build_view(state: &AppState, slot: ViewSlot) -> ViewScene {
    let level_index = state.view.level(slot);
    let Some(level) = state.building.level(level_index) else {
        return ViewScene::default();
    };

    let options = &state.options;
    let mut intents = Vec::new();

    // Ursprung des angezeigten Levels
    if let Some(info) = state.store.origin(level_index) {
        intents.push(DrawIntent::Circle {
            center: info.origin.position,
            radius: options.marker_radius_px,
            color: info.color,
        });
        intents.push(DrawIntent::Axes {
            origin: info.origin.position,
            angle: info.origin.orientation,
            length: options.axis_length_px,
            color: info.color,
        });
    }

    // Relative Posen mit Quelle = dieses Level (ziehbar)
    for (to, relative) in state.store.relatives_from(level_index) {
        let color = state
            .store
            .origin(to)
            .map_or(LevelColor::NEUTRAL, |info| info.color);
        intents.push(DrawIntent::Circle {
            center: relative.pose.position,
            radius: options.marker_radius_px,
            color,
        });
        intents.push(DrawIntent::Axes {
            origin: relative.pose.position,
            angle: relative.pose.orientation,
            length: options.axis_length_px,
            color,
        });
    }

    intents.extend(state.session.overlays().shapes_in(slot).cloned());

    if let Some(label) = state.session.label().filter(|label| label.view == slot) {
        intents.push(DrawIntent::Label {
            anchor: label.anchor,
            text: label.text.clone(),
        });
    }

    ViewScene {
        level_index: Some(level_index),
        drawing_size: [level.drawing_width, level.drawing_height],
        intents,
    }
}

#[cfg(test)]
mod tests {
    use super::build;
    use crate::app::interaction::{handle_pointer, PointerEvent};
    use crate::app::AppState;
    use crate::core::{Building, Level};
    use crate::shared::{AlignOptions, DrawIntent, ViewSlot};
    use glam::DVec2;

    fn state() -> AppState {
        let building = Building::new(
            "B",
            vec![Level::new("EG", 200, 100), Level::new("OG", 300, 150)],
        );
        AppState::new(building, AlignOptions::default())
    }

    #[test]
    fn test_build_draws_seeded_origins_per_view() {
        let state = state();
        let scene = build(&state);

        assert_eq!(scene.first.level_index, Some(0));
        assert_eq!(scene.first.drawing_size, [200, 100]);
        assert_eq!(scene.second.drawing_size, [300, 150]);
        assert!(matches!(
            scene.first.intents.as_slice(),
            [DrawIntent::Circle { center, .. }, DrawIntent::Axes { .. }]
                if *center == DVec2::new(100.0, 50.0)
        ));
        assert!(scene.notification.is_none());
    }

    #[test]
    fn test_build_includes_overlays_and_label_only_in_owning_view() {
        let mut state = state();
        handle_pointer(
            &mut state,
            PointerEvent::press(ViewSlot::First, DVec2::new(10.0, 10.0), false),
        );
        handle_pointer(
            &mut state,
            PointerEvent::moved(ViewSlot::First, DVec2::new(30.0, 10.0)),
        );

        let scene = build(&state);
        // Ursprung (2) + Marker + Vorschau + Label
        assert_eq!(scene.first.intents.len(), 5);
        assert!(matches!(
            scene.first.intents.last(),
            Some(DrawIntent::Label { .. })
        ));
        assert_eq!(scene.second.intents.len(), 2);
    }

    #[test]
    fn test_build_draws_relative_in_source_view() {
        let mut state = state();
        handle_pointer(
            &mut state,
            PointerEvent::press(ViewSlot::Second, DVec2::new(10.0, 10.0), false),
        );
        handle_pointer(
            &mut state,
            PointerEvent::press(ViewSlot::Second, DVec2::new(10.0, 40.0), false),
        );
        assert!(state.store.has_relative(1, 0));

        let scene = build(&state);
        let target_color = state.store.origin(0).map(|info| info.color);
        let relative_circle = scene.second.intents.iter().find_map(|intent| match intent {
            DrawIntent::Circle { center, color, .. } if *center == DVec2::new(10.0, 10.0) => {
                Some(*color)
            }
            _ => None,
        });
        assert_eq!(relative_circle, target_color);
    }
}
