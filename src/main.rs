use eframe::egui;
use eframe::egui::{Color32, Visuals};
use hive::config::HiveConfig;
use hive::content::ContentResolver;
use hive::logging::{self, DebugLog};
use hive::models::AppState;
use hive::ui;
use std::error::Error;

pub struct HiveApp {
    state: AppState,
}

impl HiveApp {
    pub fn new(cc: &eframe::CreationContext<'_>, state: AppState) -> Self {
        egui_extras::install_image_loaders(&cc.egui_ctx);
        Self { state }
    }
}

fn debug_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::bottom("debug_panel")
        .resizable(true)
        .min_height(50.0)
        .default_height(state.debug_panel_height)
        .show_animated(ctx, state.debug_panel_visible, |ui| {
            state.debug_panel_height = ui.available_height();

            ui.horizontal(|ui| {
                ui.heading("Debug Output");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Clear").clicked() {
                        state.debug_log.clear();
                    }
                    if ui.button("Hide").clicked() {
                        state.debug_panel_visible = false;
                    }
                });
            });
            ui.separator();

            let mut output = state.debug_log.contents();
            egui::ScrollArea::vertical()
                .stick_to_bottom(true)
                .show(ui, |ui| {
                    ui.add(
                        egui::TextEdit::multiline(&mut output)
                            .desired_width(f32::INFINITY)
                            .desired_rows(10)
                            .font(egui::TextStyle::Monospace)
                            .code_editor()
                            .lock_focus(false)
                            .interactive(false),
                    );
                });
        });
}

impl eframe::App for HiveApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(Visuals::light());

        ui::poll_bundle(ctx, &mut self.state);

        egui::TopBottomPanel::top("title_bar")
            .frame(
                egui::Frame::default()
                    .fill(Color32::from_rgb(33, 43, 181))
                    .inner_margin(8.0),
            )
            .show(ctx, |ui| ui::title_bar(ui, &mut self.state));

        debug_panel(ctx, &mut self.state);

        egui::SidePanel::left("config_panel")
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| ui::config_panel(ui, &mut self.state));
            });

        egui::SidePanel::right("cmp_panel")
            .default_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| ui::cmp_panel(ui, &mut self.state));
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui::centre_panel(ui, &mut self.state);

            if !self.state.debug_panel_visible {
                ui.with_layout(egui::Layout::bottom_up(egui::Align::Center), |ui| {
                    if ui.button("Show Debug Panel").clicked() {
                        self.state.debug_panel_visible = true;
                    }
                });
            }
        });
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let log = DebugLog::new();
    logging::init_logging(&log)?;

    let config = HiveConfig::from_env();
    tracing::info!(
        dataset_root = %config.dataset_root.display(),
        prefix = %config.hierarchical_prefix,
        "starting HIVE"
    );

    let state = ui::initial_state(ContentResolver::new(config), log);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1400.0, 900.0]),
        ..Default::default()
    };
    eframe::run_native(
        "HIVE",
        options,
        Box::new(move |cc| Ok(Box::new(HiveApp::new(cc, state)))),
    )?;

    Ok(())
}
