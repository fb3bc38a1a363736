use crate::model::{Draft, DraftField, EditTarget, ProjectRecordStore, ProjectStatus};
use crate::ui::theme;
use chrono::NaiveDate;
use egui::{Color32, Context, RichText, Ui, Window};

/// What the user asked the project dialog to do this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectDialogAction {
    None,
    Save,
    Cancel,
}

/// Raw text of the numeric inputs while they are being typed.
///
/// The draft only holds coerced numbers, so partial input like `"12."`
/// lives here until the field loses focus.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub progress: String,
    pub team: String,
    pub budget: String,
}

impl ProjectForm {
    /// Refill the inputs from a freshly opened draft.
    pub fn load(&mut self, draft: &Draft) {
        self.progress = draft.progress.to_string();
        self.team = draft.team.to_string();
        self.budget = draft.budget.to_string();
    }
}

/// Render the "New Project" / "Edit Project" dialog for the store's open draft.
pub fn show_project_dialog(
    store: &mut ProjectRecordStore,
    form: &mut ProjectForm,
    ctx: &Context,
) -> ProjectDialogAction {
    let Some(target) = store.edit_target() else {
        return ProjectDialogAction::None;
    };
    let title = match target {
        EditTarget::New => "New Project",
        EditTarget::Existing(_) => "Edit Project",
    };

    let mut action = ProjectDialogAction::None;
    Window::new(RichText::new(title).strong().size(14.0))
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([theme::DIALOG_WIDTH, 0.0])
        .show(ctx, |ui| {
            ui.visuals_mut().extreme_bg_color = theme::BG_FIELD;
            ui.visuals_mut().faint_bg_color = Color32::TRANSPARENT;
            ui.add_space(4.0);

            egui::Grid::new("project_form_grid")
                .num_columns(2)
                .striped(false)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    text_row(ui, store, "Project Name", DraftField::Name, |d| d.name.as_str());
                    text_row(ui, store, "Client", DraftField::Client, |d| d.client.as_str());
                    numeric_row(ui, store, &mut form.progress, "Progress (%)", DraftField::Progress);
                    numeric_row(ui, store, &mut form.team, "Team Size", DraftField::Team);
                    numeric_row(ui, store, &mut form.budget, "Budget", DraftField::Budget);
                    status_row(ui, store);
                    deadline_row(ui, store);
                });

            ui.add_space(6.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                let save_btn = egui::Button::new(RichText::new("Save").color(Color32::WHITE))
                    .fill(theme::ACCENT)
                    .rounding(egui::Rounding::same(4.0));
                if ui.add_sized([80.0, 28.0], save_btn).clicked() {
                    action = ProjectDialogAction::Save;
                }
                if ui.add_sized([80.0, 28.0], egui::Button::new("Cancel")).clicked() {
                    action = ProjectDialogAction::Cancel;
                }
            });
            ui.add_space(2.0);
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = ProjectDialogAction::Cancel;
    }
    action
}

fn label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(theme::TEXT_SECONDARY));
}

fn text_row(
    ui: &mut Ui,
    store: &mut ProjectRecordStore,
    caption: &str,
    field: DraftField,
    value: fn(&Draft) -> &str,
) {
    let Some(mut text) = store.draft().map(|d| value(d).to_string()) else { return };

    label(ui, caption);
    let resp = ui.add_sized(
        [260.0, 24.0],
        egui::TextEdit::singleline(&mut text).text_color(theme::TEXT_PRIMARY),
    );
    if resp.changed() {
        store.update_draft_field(field, &text);
    }
    ui.end_row();
}

fn numeric_row(
    ui: &mut Ui,
    store: &mut ProjectRecordStore,
    buffer: &mut String,
    caption: &str,
    field: DraftField,
) {
    label(ui, caption);
    let resp = ui.add_sized([120.0, 24.0], egui::TextEdit::singleline(buffer));
    if resp.changed() {
        store.update_draft_field(field, buffer);
    }
    if resp.lost_focus() {
        // Show the coerced value once editing is done.
        if let Some(draft) = store.draft() {
            *buffer = match field {
                DraftField::Progress => draft.progress.to_string(),
                DraftField::Team => draft.team.to_string(),
                _ => draft.budget.to_string(),
            };
        }
    }
    ui.end_row();
}

fn status_row(ui: &mut Ui, store: &mut ProjectRecordStore) {
    let Some(current) = store.draft().map(|d| d.status) else { return };

    label(ui, "Status");
    egui::ComboBox::from_id_salt("project_status")
        .selected_text(current.label())
        .width(160.0)
        .show_ui(ui, |ui| {
            for status in ProjectStatus::ALL {
                if ui.selectable_label(status == current, status.label()).clicked() {
                    store.update_draft_field(DraftField::Status, status.label());
                }
            }
        });
    ui.end_row();
}

fn deadline_row(ui: &mut Ui, store: &mut ProjectRecordStore) {
    let Some(deadline) = store.draft().map(|d| d.deadline.clone()) else { return };

    label(ui, "Deadline");
    ui.horizontal(|ui| {
        let mut text = deadline.clone();
        let resp = ui.add_sized(
            [120.0, 24.0],
            egui::TextEdit::singleline(&mut text).hint_text("YYYY-MM-DD"),
        );
        if resp.changed() {
            store.update_draft_field(DraftField::Deadline, &text);
        }

        let parsed = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d").ok();
        let mut picked = parsed.unwrap_or_else(|| chrono::Local::now().date_naive());
        let picker =
            ui.add(egui_extras::DatePickerButton::new(&mut picked).id_salt("project_deadline"));
        if picker.changed() || (parsed.is_some() && Some(picked) != parsed) {
            store.update_draft_field(DraftField::Deadline, &picked.format("%Y-%m-%d").to_string());
        }
    });
    ui.end_row();
}
