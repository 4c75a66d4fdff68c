//! Zentrale Konfiguration für den Level-Align-Editor.
//!
//! `AlignOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Hit-Test ────────────────────────────────────────────────────────

/// Radius (Pixel) um eine relative Pose, in dem ein Klick sie verschiebt.
pub const HIT_RADIUS_PX: f64 = 5.0;
/// Länge des Dreh-Bandes entlang der lokalen +X-Achse (Pixel).
pub const ROTATE_HANDLE_LENGTH_PX: f64 = 22.0;
/// Halbe Breite des Dreh-Bandes (Pixel).
pub const ROTATE_HANDLE_HALF_WIDTH_PX: f64 = 3.0;

// ── Darstellung ─────────────────────────────────────────────────────

/// Länge der gezeichneten Achsen (Pixel).
pub const AXIS_LENGTH_PX: f64 = 20.0;
/// Radius der Positions-Marker (Pixel).
pub const MARKER_RADIUS_PX: f64 = 4.0;
/// Versatz des Koordinaten-Labels zum Mauszeiger (Pixel).
pub const LABEL_OFFSET_PX: [f64; 2] = [12.0, -12.0];

// ── Farben & Export ─────────────────────────────────────────────────

/// Seed für die Level-Farbfolge.
pub const COLOR_SEED: u64 = 0x1E7E1;
/// Dateiendung der Export-Datei.
pub const EXPORT_SUFFIX: &str = ".json";

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `level_align.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignOptions {
    // ── Hit-Test ────────────────────────────────────────────────
    /// Klick-Radius für Verschieben einer relativen Pose
    #[serde(default = "default_hit_radius_px")]
    pub hit_radius_px: f64,
    /// Länge des Dreh-Bandes
    #[serde(default = "default_rotate_handle_length_px")]
    pub rotate_handle_length_px: f64,
    /// Halbe Breite des Dreh-Bandes
    #[serde(default = "default_rotate_handle_half_width_px")]
    pub rotate_handle_half_width_px: f64,

    // ── Darstellung ─────────────────────────────────────────────
    /// Achsenlänge der Orientierungs-Anzeige
    #[serde(default = "default_axis_length_px")]
    pub axis_length_px: f64,
    /// Radius der Positions-Marker
    #[serde(default = "default_marker_radius_px")]
    pub marker_radius_px: f64,
    /// Label-Versatz zum Mauszeiger
    #[serde(default = "default_label_offset_px")]
    pub label_offset_px: [f64; 2],

    // ── Session ─────────────────────────────────────────────────
    /// Seed für die Farbvergabe
    #[serde(default = "default_color_seed")]
    pub color_seed: u64,
    /// Ursprünge beim Start in die Bildmitte setzen
    #[serde(default = "default_seed_default_origins")]
    pub seed_default_origins: bool,

    // ── Export ──────────────────────────────────────────────────
    /// Dateiendung, die beim Export erzwungen wird
    #[serde(default = "default_export_suffix")]
    pub export_suffix: String,
}

impl Default for AlignOptions {
    fn default() -> Self {
        Self {
            hit_radius_px: HIT_RADIUS_PX,
            rotate_handle_length_px: ROTATE_HANDLE_LENGTH_PX,
            rotate_handle_half_width_px: ROTATE_HANDLE_HALF_WIDTH_PX,
            axis_length_px: AXIS_LENGTH_PX,
            marker_radius_px: MARKER_RADIUS_PX,
            label_offset_px: LABEL_OFFSET_PX,
            color_seed: COLOR_SEED,
            seed_default_origins: true,
            export_suffix: EXPORT_SUFFIX.to_string(),
        }
    }
}

fn default_hit_radius_px() -> f64 {
    HIT_RADIUS_PX
}

fn default_rotate_handle_length_px() -> f64 {
    ROTATE_HANDLE_LENGTH_PX
}

fn default_rotate_handle_half_width_px() -> f64 {
    ROTATE_HANDLE_HALF_WIDTH_PX
}

fn default_axis_length_px() -> f64 {
    AXIS_LENGTH_PX
}

fn default_marker_radius_px() -> f64 {
    MARKER_RADIUS_PX
}

fn default_label_offset_px() -> [f64; 2] {
    LABEL_OFFSET_PX
}

fn default_color_seed() -> u64 {
    COLOR_SEED
}

fn default_seed_default_origins() -> bool {
    true
}

fn default_export_suffix() -> String {
    EXPORT_SUFFIX.to_string()
}

impl AlignOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("level_align"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("level_align.toml")
    }
}
