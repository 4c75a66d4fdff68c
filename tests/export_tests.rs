use glam::DVec2;
use level_align::export::MapAlignment;
use level_align::{AlignOptions, AppController, AppIntent, AppState, Building, Level};
use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};
use std::path::PathBuf;

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "level_align_export_{}_{}",
        std::process::id(),
        name
    ));
    std::fs::create_dir_all(&dir).expect("Temp-Verzeichnis sollte anlegbar sein");
    dir
}

fn aligned_state() -> AppState {
    let building = Building::new(
        "Halle",
        vec![
            Level::new("EG", 100, 100).with_meters_per_pixel(1.0),
            Level::new("OG", 100, 100).with_meters_per_pixel(1.0),
        ],
    );
    let options = AlignOptions {
        seed_default_origins: false,
        ..AlignOptions::default()
    };
    let mut state = AppState::new(building, options);
    let color = state.colors.next_color();
    // EG-Ursprung blickt im Bild nach unten (π/2)
    assert!(state
        .store
        .set_origin(0, "EG", DVec2::new(10.0, 10.0), DVec2::new(10.0, 20.0), color));
    let color = state.colors.next_color();
    assert!(state
        .store
        .set_origin(1, "OG", DVec2::new(50.0, 50.0), DVec2::new(60.0, 50.0), color));
    assert!(state
        .store
        .add_relative(0, 1, "OG", DVec2::new(11.0, 10.0), DVec2::new(12.0, 10.0)));
    state
}

fn export(controller: &mut AppController, state: &mut AppState, path: &str) -> anyhow::Result<()> {
    controller.handle_intent(
        state,
        AppIntent::ExportPathSelected {
            path: path.to_string(),
        },
    )
}

#[test]
fn test_export_writes_document_with_suffix() {
    let dir = temp_dir("suffix");
    let mut controller = AppController::new();
    let mut state = aligned_state();

    let target = dir.join("alignment");
    export(&mut controller, &mut state, &target.to_string_lossy()).expect("Export");

    let written = dir.join("alignment.json");
    assert!(written.exists());
    assert_eq!(
        state.ui.last_export_path.as_deref(),
        Some(written.to_string_lossy().as_ref())
    );
    let status = state.ui.status_message.clone().unwrap_or_default();
    assert!(status.contains("alignment.json"));
    assert!(status.contains("1 Verbindungen"));

    let content = std::fs::read_to_string(&written).expect("Export lesbar");
    let document: Vec<MapAlignment> = serde_json::from_str(&content).expect("Export ist JSON");
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(document.len(), 2);
    assert_eq!(document[0].map, "EG");
    assert_eq!(document[1].map, "OG");
    assert!(document[1].connections.is_empty());

    // Ziel 1 px rechts vom Ursprung, Ursprung um π/2 gedreht → +Y im Ursprungs-Frame
    let connection = &document[0].connections[0];
    assert_eq!(connection.to, "OG");
    assert!(connection.position.x.abs() < 1e-9);
    assert!((connection.position.y - 1.0).abs() < 1e-9);
    assert_eq!(connection.position.z, 0.0);

    // Relativer Yaw +π/2 um Z
    assert!((connection.orientation.w - FRAC_1_SQRT_2).abs() < 1e-9);
    assert!((connection.orientation.z - FRAC_1_SQRT_2).abs() < 1e-9);
    assert!(connection.orientation.x.abs() < 1e-12);
    assert!(connection.orientation.y.abs() < 1e-12);
    let yaw = 2.0 * connection.orientation.z.atan2(connection.orientation.w);
    assert!((yaw - FRAC_PI_2).abs() < 1e-9);
}

#[test]
fn test_repeated_export_is_byte_identical() {
    let dir = temp_dir("repeat");
    let mut controller = AppController::new();
    let mut state = aligned_state();

    let first = dir.join("first.json");
    let second = dir.join("second.json");
    export(&mut controller, &mut state, &first.to_string_lossy()).expect("Export 1");
    export(&mut controller, &mut state, &second.to_string_lossy()).expect("Export 2");

    let a = std::fs::read(&first).expect("Export 1 lesbar");
    let b = std::fs::read(&second).expect("Export 2 lesbar");
    let _ = std::fs::remove_dir_all(&dir);

    assert!(!a.is_empty());
    assert_eq!(a, b);
}

#[test]
fn test_export_failure_is_reported_and_state_unchanged() {
    let mut controller = AppController::new();
    let mut state = aligned_state();
    let missing = std::env::temp_dir()
        .join(format!("level_align_fehlt_{}", std::process::id()))
        .join("tief")
        .join("alignment.json");

    let result = export(&mut controller, &mut state, &missing.to_string_lossy());

    assert!(result.is_err());
    assert!(state.ui.last_export_path.is_none());
    assert!(state.ui.status_message.is_none());
    assert_eq!(state.store.relative_count(), 1);
}

#[test]
fn test_empty_store_exports_empty_list() {
    let dir = temp_dir("empty");
    let mut controller = AppController::new();
    let options = AlignOptions {
        seed_default_origins: false,
        ..AlignOptions::default()
    };
    let mut state = AppState::new(
        Building::new("Leer", vec![Level::new("EG", 10, 10)]),
        options,
    );

    let target = dir.join("leer.json");
    export(&mut controller, &mut state, &target.to_string_lossy()).expect("Export");
    let content = std::fs::read_to_string(&target).expect("Export lesbar");
    let _ = std::fs::remove_dir_all(&dir);

    assert_eq!(content, "[]\n");
}
