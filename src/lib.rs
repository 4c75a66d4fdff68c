//! Level-Align Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod export;
pub mod shared;
pub mod ui;

pub use app::{
    alignment_rows, AlignmentRow, AppCommand, AppController, AppIntent, AppState, UiState,
    ViewState,
};
pub use core::{
    relative_transform, AlignmentInfo, AlignmentStore, Building, ColorGenerator, Level,
    LevelColor, Pose, RelativePose, RelativeTransform,
};
pub use export::{build_alignment_document, write_alignment_file, write_alignment_json};
pub use shared::{AlignOptions, AlignScene, CursorShape, DrawIntent, ViewScene, ViewSlot};
