//! UI-Komponenten: Level-Ansichten, Seitenleiste, Status-Bar, Dialoge.

pub mod dialogs;
pub mod input;
/// UI-Layer mit egui
///
/// Zeichnet die Render-Szene der App und übersetzt egui-Input in
/// `AppIntent`s. Der Zustand wird hier nie direkt verändert.
pub mod level_view;
pub mod panel;
pub mod status;

pub use dialogs::{handle_export_dialog, show_notification};
pub use input::{InputState, PointerSample};
pub use level_view::{paint_level_view, ImageFit};
pub use panel::render_side_panel;
pub use status::render_status_bar;
