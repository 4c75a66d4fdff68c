//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Typen, die zwischen `app` und `ui` geteilt werden,
//! um direkte Abhängigkeiten zu vermeiden.

pub mod options;
mod render_scene;
mod view_slot;

pub use options::AlignOptions;
pub use render_scene::{AlignScene, CursorShape, DrawIntent, ViewScene};
pub use view_slot::ViewSlot;
