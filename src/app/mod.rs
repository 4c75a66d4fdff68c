//! Application-Layer: Controller, State, Events und Use-Cases.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod handlers;
pub mod interaction;
mod intent_mapping;
pub mod overlay;
pub mod render_scene;
/// Application State und Controller
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Gebäude, Store, Ansichten, Session).
pub mod state;
pub mod use_cases;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use interaction::{InteractionMode, InteractionSession, MouseStatus, PointerEvent};
pub use overlay::{OverlayId, OverlaySet};
pub use render_scene::build as build_render_scene;
pub use state::{AppState, UiState, ViewState};
pub use use_cases::alignment_table::{alignment_rows, AlignmentRow};
