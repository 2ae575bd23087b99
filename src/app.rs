use log::info;

use crate::chart::cpu_usage_samples;
use crate::components::{show_settings_window, GlowChart, Settings};

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct GlowChartApp {
    settings: Settings,
    #[serde(skip)]
    chart: GlowChart,
}

impl Default for GlowChartApp {
    fn default() -> Self {
        let settings = Settings::default();
        Self {
            chart: GlowChart::new(cpu_usage_samples(), settings.chart.clone()),
            settings,
        }
    }
}

impl GlowChartApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        // Note that you must enable the `persistence` feature for this to work.
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        cc.egui_ctx.set_visuals(egui::Visuals::dark());
        app.chart.set_config(app.settings.chart.clone());
        app.chart.mount();
        info!("chart mounted with {} samples", app.chart.samples().len());
        app
    }

    fn header(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Hardware Usage");
                if let Some(sample) = self.chart.nearest_sample() {
                    let summary = format!("CPU {:.0}%  •  {}", sample.value, sample.label);
                    let accent = egui::Color32::from_rgb(0x6A, 0x5D, 0xF4);
                    ui.label(egui::RichText::new(summary).color(accent));
                }
            });
        });
        ui.add_space(16.0);
    }
}

impl eframe::App for GlowChartApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.settings.apply(ctx);
        self.chart.set_config(self.settings.chart.clone());

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                // No File->Quit on web pages!
                let is_web = cfg!(target_arch = "wasm32");
                if !is_web {
                    ui.menu_button("File", |ui| {
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                    ui.add_space(16.0);
                }

                egui::widgets::global_theme_preference_buttons(ui);

                ui.add_space(16.0);
                if ui.button("⚙").clicked() {
                    self.settings.show();
                }
            });
        });

        show_settings_window(ctx, &mut self.settings);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.header(ui);
            egui::ScrollArea::both().show(ui, |ui| {
                self.chart.show(ui);
            });
        });
    }
}
