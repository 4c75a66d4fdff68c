//! Level-Align (Ebenen-Ausrichtung).
//!
//! Richtet die Grundrisse der Ebenen eines Gebäudes paarweise zueinander aus
//! und exportiert die relativen Transformationen.

use eframe::egui;
use level_align::{
    ui, AlignOptions, AppController, AppIntent, AppState, Building, CursorShape, ViewSlot,
};
use std::path::{Path, PathBuf};

fn main() -> anyhow::Result<()> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> anyhow::Result<()> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Level-Align v{} startet...", env!("CARGO_PKG_VERSION"));

        let building_path = std::env::args()
            .nth(1)
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Aufruf: level-align <building.json>"))?;
        let building = Building::load_from_file(&building_path)?;

        let config_path = AlignOptions::config_path();
        let options = AlignOptions::load_from_file(&config_path);

        let image_uris = resolve_image_uris(&building, &building_path);
        let title = format!("Level-Align: {}", building.name);

        let native_options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1400.0, 800.0])
                .with_title(title),
            ..Default::default()
        };

        eframe::run_native(
            "Level-Align",
            native_options,
            Box::new(move |cc| {
                egui_extras::install_image_loaders(&cc.egui_ctx);
                Ok(Box::new(AlignApp::new(building, options, image_uris)))
            }),
        )
        .map_err(|e| anyhow::anyhow!("eframe beendet mit Fehler: {}", e))
    }
}

/// Bild-URIs je Level (relativ zur Gebäude-Datei aufgelöst).
fn resolve_image_uris(building: &Building, building_path: &Path) -> Vec<Option<String>> {
    let base_dir = building_path.parent().unwrap_or_else(|| Path::new("."));
    building
        .levels
        .iter()
        .map(|level| {
            level
                .image_path
                .as_ref()
                .map(|image| format!("file://{}", base_dir.join(image).display()))
        })
        .collect()
}

/// Haupt-Anwendungsstruktur
struct AlignApp {
    state: AppState,
    controller: AppController,
    input: ui::InputState,
    image_uris: Vec<Option<String>>,
}

impl AlignApp {
    fn new(building: Building, options: AlignOptions, image_uris: Vec<Option<String>>) -> Self {
        Self {
            state: AppState::new(building, options),
            controller: AppController::new(),
            input: ui::InputState::new(),
            image_uris,
        }
    }
}

impl eframe::App for AlignApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        // Szene nach jeder Verarbeitung neu aufbauen
        if has_events {
            ctx.request_repaint();
        }
    }
}

impl AlignApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let scene = self.controller.build_render_scene(&self.state);
        let mut events = Vec::new();

        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_side_panel(ctx, &self.state));
        events.extend(ui::show_notification(ctx, scene.notification.as_deref()));
        events.extend(ui::handle_export_dialog(
            &mut self.state.ui,
            &self.state.options.export_suffix,
            &self.state.building.name,
        ));

        let mut fits = Vec::with_capacity(ViewSlot::ALL.len());
        let image_uris = &self.image_uris;
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.columns(ViewSlot::ALL.len(), |columns| {
                for (column, slot) in columns.iter_mut().zip(ViewSlot::ALL) {
                    let view_scene = scene.view(slot);
                    let image_uri = view_scene
                        .level_index
                        .and_then(|index| image_uris.get(index))
                        .and_then(|uri| uri.as_deref());
                    fits.push((slot, ui::paint_level_view(column, view_scene, image_uri)));
                }
            });
        });

        // Während einer Meldung ist die Interaktion blockiert
        if scene.notification.is_none() {
            let sample = ui::PointerSample::from_context(ctx);
            events.extend(self.input.collect_pointer_intents(&sample, &fits));
        }

        if scene.cursor == CursorShape::OpenHand && self.input.is_over_view() {
            ctx.set_cursor_icon(egui::CursorIcon::Grab);
        }

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event-Verarbeitung fehlgeschlagen: {:#}", e);
                self.state.ui.status_message = Some(format!("Fehler: {:#}", e));
            }
        }
    }
}
