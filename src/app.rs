use std::path::PathBuf;

use crate::config::Settings;
use crate::model::{CommitOutcome, ProjectRecordStore, RecordId};
use crate::module::PROJECTS_MODULE;
use crate::ui;
use crate::ui::format::format_percent;
use crate::ui::project_dialog::{ProjectDialogAction, ProjectForm};
use crate::ui::project_table::ProjectTableAction;

/// Main application state.
pub struct ProjectsApp {
    pub store: ProjectRecordStore,
    pub settings: Settings,
    pub settings_path: PathBuf,

    // Dialog state
    pub form: ProjectForm,
    pub show_about: bool,

    // Status message
    pub status_message: String,
}

impl ProjectsApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, settings_path: PathBuf) -> Self {
        // Register Phosphor icon font as a fallback so icons render inline with text
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        Self::with_settings(settings, settings_path)
    }

    fn with_settings(settings: Settings, settings_path: PathBuf) -> Self {
        let store = if settings.seed_sample_projects {
            ProjectRecordStore::with_sample_projects()
        } else {
            ProjectRecordStore::new()
        };
        Self {
            store,
            settings,
            settings_path,
            form: ProjectForm::default(),
            show_about: false,
            status_message: "Ready".to_string(),
        }
    }

    // --- Project operations ---

    /// Open the dialog for a new project. Ignored while a dialog is open.
    pub fn begin_create(&mut self) {
        if self.store.is_editing() {
            return;
        }
        self.store.begin_create();
        if let Some(draft) = self.store.draft() {
            self.form.load(draft);
        }
    }

    pub fn begin_edit(&mut self, id: RecordId) {
        if self.store.is_editing() {
            return;
        }
        self.store.begin_edit(id);
        if let Some(draft) = self.store.draft() {
            self.form.load(draft);
        }
    }

    pub fn save_dialog(&mut self) {
        let outcome = self.store.commit_draft();
        let name_of = |store: &ProjectRecordStore, id| {
            store
                .record(id)
                .map(|r| r.name.clone())
                .unwrap_or_default()
        };
        self.status_message = match outcome {
            CommitOutcome::Created(id) => {
                let name = name_of(&self.store, id);
                tracing::info!(%id, "added project '{name}'");
                format!("Added '{name}'")
            }
            CommitOutcome::Updated(id) => {
                let name = name_of(&self.store, id);
                tracing::info!(%id, "updated project '{name}'");
                format!("Updated '{name}'")
            }
            CommitOutcome::Unchanged => "Nothing to save".to_string(),
        };
    }

    pub fn cancel_dialog(&mut self) {
        self.store.cancel_edit();
    }

    pub fn delete_project(&mut self, id: RecordId) {
        let name = self.store.record(id).map(|r| r.name.clone());
        if self.store.delete_record(id) {
            let name = name.unwrap_or_default();
            tracing::info!(%id, "deleted project '{name}'");
            self.status_message = format!("Deleted '{name}'");
        } else {
            self.status_message = "Nothing to delete".to_string();
        }
    }

    pub fn adjust_progress(&mut self, id: RecordId, delta: i64) {
        if let Some(progress) = self.store.adjust_progress(id, delta) {
            let name = self.store.record(id).map(|r| r.name.as_str()).unwrap_or_default();
            self.status_message = format!("'{}' is now {}", name, format_percent(progress));
        }
    }

    /// Apply a table action. The table is locked while the dialog is open,
    /// so actions arriving then are dropped and the draft is kept.
    pub fn handle_table_action(&mut self, action: ProjectTableAction) {
        if self.store.is_editing() {
            return;
        }
        match action {
            ProjectTableAction::Edit(id) => self.begin_edit(id),
            ProjectTableAction::Delete(id) => self.delete_project(id),
            ProjectTableAction::AdjustProgress(id, delta) => self.adjust_progress(id, delta),
            ProjectTableAction::None => {}
        }
    }

    pub fn export_csv(&mut self) {
        if self.store.records().is_empty() {
            self.status_message = "Nothing to export, there are no projects".to_string();
            return;
        }

        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .set_file_name("projects.csv")
            .save_file()
        {
            match crate::io::export_csv(self.store.records(), &path) {
                Ok(count) => {
                    tracing::info!(path = %path.display(), count, "exported projects");
                    self.status_message = format!("Exported {} projects to CSV", count);
                }
                Err(e) => {
                    tracing::warn!(path = %path.display(), "CSV export failed: {e}");
                    self.status_message = format!("CSV export failed: {}", e);
                }
            }
        }
    }

    // --- Settings ---

    pub fn reload_settings(&mut self) {
        match Settings::load_from(&self.settings_path) {
            Ok(settings) => {
                self.settings = settings;
                self.status_message = "Settings reloaded".to_string();
            }
            Err(e) => {
                tracing::warn!("settings reload failed: {e}");
                self.status_message = format!("Settings reload failed: {}", e);
            }
        }
    }

    pub fn open_settings_folder(&mut self) {
        let Some(dir) = self.settings_path.parent() else {
            return;
        };
        if let Err(e) = open::that(dir) {
            tracing::warn!(dir = %dir.display(), "could not open settings folder: {e}");
            self.status_message = format!("Could not open settings folder: {}", e);
        }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        let average = self
            .store
            .summary()
            .average_progress
            .map(format_percent)
            .unwrap_or_else(|| "—".to_string());

        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(format!(
                    "{} {} Dashboard",
                    PROJECTS_MODULE.icon.glyph(),
                    PROJECTS_MODULE.name
                ))
                .font(ui::theme::font_title())
                .strong(),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(format!("Avg progress {}", average))
                    .size(12.0)
                    .color(ui::theme::TEXT_DIM),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let btn = egui::Button::new(
                    egui::RichText::new(format!(
                        "{}  New Project",
                        egui_phosphor::regular::PLUS
                    ))
                    .color(egui::Color32::WHITE),
                )
                .fill(ui::theme::ACCENT)
                .rounding(egui::Rounding::same(5.0));
                if ui.add_sized([130.0, 30.0], btn).clicked() {
                    self.begin_create();
                }
            });
        });
    }
}

impl eframe::App for ProjectsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ui::theme::apply_theme(ctx);

        // Top panel: toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui::toolbar::show_toolbar(self, ui);
        });

        // Bottom panel: status bar
        egui::TopBottomPanel::bottom("status_bar")
            .exact_height(ui::theme::STATUS_BAR_HEIGHT)
            .frame(
                egui::Frame::default()
                    .fill(ui::theme::BG_HEADER)
                    .inner_margin(egui::Margin::symmetric(10.0, 0.0)),
            )
            .show(ctx, |ui| {
                ui.horizontal_centered(|ui| {
                    ui.label(
                        egui::RichText::new(&self.status_message)
                            .font(ui::theme::font_status())
                            .color(ui::theme::TEXT_SECONDARY),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            egui::RichText::new(format!("Projects: {}", self.store.records().len()))
                                .size(10.5)
                                .color(ui::theme::TEXT_DIM),
                        );
                    });
                });
            });

        // Central panel: header, tiles, table
        let mut table_action = ProjectTableAction::None;
        let page_frame = egui::Frame::default()
            .fill(ui::theme::BG_DARK)
            .inner_margin(egui::Margin::same(16.0));
        let editing = self.store.is_editing();
        egui::CentralPanel::default().frame(page_frame).show(ctx, |ui| {
            // The page is locked while the project dialog is open.
            ui.add_enabled_ui(!editing, |ui| {
                self.show_header(ui);
                ui.add_space(12.0);

                let summary = self.store.summary();
                ui::summary_tiles::show_summary_tiles(&summary, &self.settings.currency_symbol, ui);
                ui.add_space(16.0);

                egui::Frame::default()
                    .fill(ui::theme::BG_PANEL)
                    .rounding(egui::Rounding::same(8.0))
                    .stroke(egui::Stroke::new(1.0, ui::theme::BORDER_SUBTLE))
                    .inner_margin(egui::Margin::same(12.0))
                    .show(ui, |ui| {
                        egui::ScrollArea::horizontal().show(ui, |ui| {
                            table_action = ui::project_table::show_project_table(
                                self.store.records(),
                                &self.settings.currency_symbol,
                                self.settings.progress_step,
                                ui,
                            );
                        });
                    });
            });
        });

        self.handle_table_action(table_action);

        // Dialogs
        if self.store.is_editing() {
            match ui::project_dialog::show_project_dialog(&mut self.store, &mut self.form, ctx) {
                ProjectDialogAction::Save => self.save_dialog(),
                ProjectDialogAction::Cancel => self.cancel_dialog(),
                ProjectDialogAction::None => {}
            }
        }
        if self.show_about {
            ui::dialogs::show_about_dialog(self, ctx);
        }
    }
}
