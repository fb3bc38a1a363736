use crate::app::ProjectsApp;
use crate::module::PROJECTS_MODULE;
use crate::ui::theme;
use egui::{Context, RichText, Window};

/// Render the "About" dialog.
pub fn show_about_dialog(app: &mut ProjectsApp, ctx: &Context) {
    let mut should_close = false;
    Window::new("About")
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([300.0, 180.0])
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(12.0);
                ui.heading(
                    RichText::new(format!(
                        "{} {}",
                        PROJECTS_MODULE.icon.glyph(),
                        PROJECTS_MODULE.name
                    ))
                    .strong(),
                );
                ui.add_space(2.0);
                ui.label(
                    RichText::new(format!("Version {}", env!("CARGO_PKG_VERSION")))
                        .color(theme::TEXT_SECONDARY),
                );
                ui.add_space(10.0);
                ui.label("A project tracking dashboard");
                ui.label("built with Rust and egui.");
                ui.add_space(6.0);
                ui.label(
                    RichText::new(format!(
                        "{} · {}",
                        PROJECTS_MODULE.path, PROJECTS_MODULE.component
                    ))
                    .small()
                    .color(theme::TEXT_DIM),
                );
                ui.add_space(14.0);
                if ui.add_sized([100.0, 28.0], egui::Button::new("Close")).clicked() {
                    should_close = true;
                }
            });
        });
    if should_close || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        app.show_about = false;
    }
}
