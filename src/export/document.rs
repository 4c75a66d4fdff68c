//! Export-Dokument: je Quell-Level eine Liste von Verbindungen.

use crate::core::{relative_transform, AlignmentStore, Building, RelativeTransform};
use serde::{Deserialize, Serialize};

/// Versatz in Metern.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Orientierung als Quaternion (w, x, y, z).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExportOrientation {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Eine Verbindung Quell-Level → Ziel-Level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionRecord {
    /// Name des Ziel-Levels
    #[serde(rename = "To")]
    pub to: String,
    /// Ursprung des Ziels im Frame des Quell-Ursprungs
    #[serde(rename = "Position")]
    pub position: ExportPosition,
    /// Relative Drehung des Ziels
    #[serde(rename = "Orientation")]
    pub orientation: ExportOrientation,
}

/// Alle Verbindungen eines Quell-Levels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapAlignment {
    /// Name des Quell-Levels
    #[serde(rename = "Map")]
    pub map: String,
    /// Verbindungen (evtl. leer)
    #[serde(rename = "Connection")]
    pub connections: Vec<ConnectionRecord>,
}

/// Geordnete Folge der Level-Dokumente.
pub type AlignmentDocument = Vec<MapAlignment>;

impl ConnectionRecord {
    fn from_transform(to: &str, transform: &RelativeTransform) -> Self {
        Self {
            to: to.to_string(),
            position: ExportPosition {
                x: transform.position.x,
                y: transform.position.y,
                z: transform.position.z,
            },
            orientation: ExportOrientation {
                w: transform.orientation.w,
                x: transform.orientation.x,
                y: transform.orientation.y,
                z: transform.orientation.z,
            },
        }
    }
}

/// Baut das Export-Dokument aus dem Store.
///
/// Reihenfolge: Quell-Levels nach Index, darin Ziele nach Index. Jedes Level
/// mit Ursprung erscheint, auch ohne Verbindungen.
pub fn build_alignment_document(store: &AlignmentStore, building: &Building) -> AlignmentDocument {
    store
        .origins()
        .map(|info| {
            let meters_per_pixel = building.meters_per_pixel(&info.level_name);
            let connections = store
                .relatives_from(info.level_index)
                .map(|(_, relative)| {
                    let transform =
                        relative_transform(&info.origin, &relative.pose, meters_per_pixel);
                    ConnectionRecord::from_transform(&relative.target_name, &transform)
                })
                .collect();

            MapAlignment {
                map: info.level_name.clone(),
                connections,
            }
        })
        .collect()
}

/// Anzahl der Verbindungen über alle Levels.
pub fn connection_count(document: &AlignmentDocument) -> usize {
    document.iter().map(|map| map.connections.len()).sum()
}
