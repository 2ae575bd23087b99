use super::state::Settings;
use crate::chart::SpringConfig;

pub fn show_settings_window(ctx: &egui::Context, settings: &mut Settings) {
    if !settings.is_visible() {
        return;
    }

    egui::Window::new("⚙ Settings")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("UI Scale:");
                ui.add(egui::Slider::new(&mut settings.scale, 0.5..=2.0).step_by(0.1));
            });

            ui.horizontal(|ui| {
                ui.label("Font Size:");
                ui.add(egui::Slider::new(&mut settings.font_size, 8.0..=32.0).step_by(1.0));
            });

            ui.separator();

            let animation = &mut settings.chart.animation;
            spring_sliders(ui, "Position", &mut animation.position);
            spring_sliders(ui, "Glow trail", &mut animation.glow);
            spring_sliders(ui, "Rotation", &mut animation.rotation);
            spring_sliders(ui, "Facing", &mut animation.facing);
            spring_sliders(ui, "Hover fade", &mut animation.hover_opacity);

            ui.horizontal(|ui| {
                ui.label("Flare period (s):");
                ui.add(egui::Slider::new(&mut animation.flare.duration_secs, 0.1..=5.0));
            });

            ui.separator();

            let chart = &mut settings.chart;
            ui.horizontal(|ui| {
                ui.label("Trace step:");
                ui.add(egui::Slider::new(&mut chart.trace.step, 0.5..=10.0).step_by(0.5));
            });
            ui.horizontal(|ui| {
                ui.label("Curve alpha:");
                ui.add(egui::Slider::new(&mut chart.curve_alpha, 0.0..=1.0).step_by(0.05));
            });
            ui.horizontal(|ui| {
                ui.label("Marker image:");
                if ui.text_edit_singleline(&mut settings.marker_input).lost_focus() {
                    settings.commit_marker_input();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Reset chart").clicked() {
                    settings.reset_chart();
                }
                if ui.button("Close").clicked() {
                    settings.hide();
                }
            });
        });
}

fn spring_sliders(ui: &mut egui::Ui, name: &str, spring: &mut SpringConfig) {
    ui.horizontal(|ui| {
        ui.label(format!("{name}:"));
        ui.add(egui::Slider::new(&mut spring.stiffness, 10.0..=500.0).text("stiffness"));
        ui.add(egui::Slider::new(&mut spring.damping, 1.0..=100.0).text("damping"));
    });
}
