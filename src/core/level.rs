//! Level- und Gebäude-Beschreibung (vom Host geliefert, read-only).

use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Maßstab für Level ohne eigene Angabe (Meter pro Pixel).
pub const DEFAULT_METERS_PER_PIXEL: f64 = 0.05;

fn default_meters_per_pixel() -> f64 {
    DEFAULT_METERS_PER_PIXEL
}

/// Ein Floor-Plan mit eigenem Pixel-Koordinatensystem.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Anzeigename (eindeutig innerhalb des Gebäudes)
    pub name: String,
    /// Bildbreite in Pixeln
    pub drawing_width: u32,
    /// Bildhöhe in Pixeln
    pub drawing_height: u32,
    /// Physikalischer Maßstab
    #[serde(default = "default_meters_per_pixel")]
    pub meters_per_pixel: f64,
    /// Pfad zum Floor-Plan-Bild (Anzeige übernimmt das UI)
    #[serde(default)]
    pub image_path: Option<String>,
}

impl Level {
    /// Erstellt ein Level mit Standard-Maßstab und ohne Bild.
    pub fn new(name: impl Into<String>, drawing_width: u32, drawing_height: u32) -> Self {
        Self {
            name: name.into(),
            drawing_width,
            drawing_height,
            meters_per_pixel: DEFAULT_METERS_PER_PIXEL,
            image_path: None,
        }
    }

    /// Setzt den Maßstab (Builder-Stil, v.a. für Tests).
    pub fn with_meters_per_pixel(mut self, meters_per_pixel: f64) -> Self {
        self.meters_per_pixel = meters_per_pixel;
        self
    }
}

/// Gebäude mit allen Levels in Host-Reihenfolge (Index = Level-Index).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Building {
    /// Gebäudename
    #[serde(default)]
    pub name: String,
    /// Alle Levels
    pub levels: Vec<Level>,
}

impl Building {
    /// Erstellt ein Gebäude aus einer Level-Liste.
    pub fn new(name: impl Into<String>, levels: Vec<Level>) -> Self {
        Self {
            name: name.into(),
            levels,
        }
    }

    /// Gibt das Level mit Index `index` zurück.
    pub fn level(&self, index: usize) -> Option<&Level> {
        self.levels.get(index)
    }

    /// Anzahl der Levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Maßstab eines Levels über seinen Namen.
    ///
    /// Unbekannte Namen liefern `DEFAULT_METERS_PER_PIXEL`.
    pub fn meters_per_pixel(&self, level_name: &str) -> f64 {
        match self.levels.iter().find(|l| l.name == level_name) {
            Some(level) => level.meters_per_pixel,
            None => {
                log::warn!(
                    "Level '{}' unbekannt, verwende Standard-Maßstab {}",
                    level_name,
                    DEFAULT_METERS_PER_PIXEL
                );
                DEFAULT_METERS_PER_PIXEL
            }
        }
    }

    /// Parst eine Gebäude-Beschreibung aus JSON und validiert sie.
    pub fn from_json(content: &str) -> Result<Self> {
        let building: Building =
            serde_json::from_str(content).context("Gebäude-Beschreibung ist kein gültiges JSON")?;
        building.validate()?;
        Ok(building)
    }

    /// Lädt eine Gebäude-Beschreibung aus einer JSON-Datei.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Gebäude-Datei nicht lesbar: {}", path.display()))?;
        let building = Self::from_json(&content)?;
        log::info!(
            "Gebäude '{}' geladen: {} Levels aus {}",
            building.name,
            building.level_count(),
            path.display()
        );
        Ok(building)
    }

    fn validate(&self) -> Result<()> {
        for (index, level) in self.levels.iter().enumerate() {
            ensure!(
                level.meters_per_pixel.is_finite() && level.meters_per_pixel > 0.0,
                "Level {} ('{}'): meters_per_pixel muss > 0 sein, ist {}",
                index,
                level.name,
                level.meters_per_pixel
            );
            ensure!(
                !self.levels[..index].iter().any(|l| l.name == level.name),
                "Level-Name '{}' ist doppelt vergeben",
                level.name
            );
        }
        Ok(())
    }
}
