use crate::app::ProjectsApp;
use crate::module::PROJECTS_MODULE;
use crate::ui::theme;
use egui::{menu, RichText, Ui};

/// Render the top toolbar / menu bar.
pub fn show_toolbar(app: &mut ProjectsApp, ui: &mut Ui) {
    menu::bar(ui, |ui| {
        ui.menu_button(RichText::new("  File  ").font(theme::font_menu()), |ui| {
            let new_project =
                ui.add_enabled(!app.store.is_editing(), egui::Button::new("  New Project..."));
            if new_project.clicked() {
                app.begin_create();
                ui.close_menu();
            }
            ui.separator();
            if ui.button("  Export CSV...").clicked() {
                app.export_csv();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Settings  ").font(theme::font_menu()), |ui| {
            if ui.button("  Reload Settings").clicked() {
                app.reload_settings();
                ui.close_menu();
            }
            if ui.button("  Open Settings Folder").clicked() {
                app.open_settings_folder();
                ui.close_menu();
            }
        });

        ui.menu_button(RichText::new("  Help  ").font(theme::font_menu()), |ui| {
            if ui.button("About").clicked() {
                app.show_about = true;
                ui.close_menu();
            }
        });

        // Right-aligned navigation path
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(PROJECTS_MODULE.path).size(11.0).weak());
        });
    });
}
