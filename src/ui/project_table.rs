use crate::model::{ProjectRecord, RecordId};
use crate::ui::format::{format_amount, format_percent};
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular as icons;

/// Actions that the project table can request.
pub enum ProjectTableAction {
    None,
    Edit(RecordId),
    Delete(RecordId),
    AdjustProgress(RecordId, i64),
}

/// Render the "Project Overview" table.
pub fn show_project_table(
    records: &[ProjectRecord],
    currency_symbol: &str,
    progress_step: i64,
    ui: &mut Ui,
) -> ProjectTableAction {
    let mut action = ProjectTableAction::None;

    ui.horizontal(|ui| {
        ui.label(
            RichText::new("Project Overview")
                .strong()
                .size(15.0)
                .color(theme::TEXT_PRIMARY),
        );
        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("({})", records.len()))
                .size(11.0)
                .color(theme::TEXT_DIM),
        );
    });
    ui.add_space(6.0);

    TableBuilder::new(ui)
        .striped(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::remainder().at_least(140.0))
        .column(Column::auto().at_least(100.0))
        .column(Column::exact(230.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(70.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::exact(70.0))
        .header(24.0, |mut header| {
            for title in [
                "PROJECT NAME",
                "CLIENT",
                "PROGRESS",
                "STATUS",
                "TEAM SIZE",
                "BUDGET",
                "DEADLINE",
                "ACTIONS",
            ] {
                header.col(|ui| {
                    ui.label(RichText::new(title).size(10.0).strong().color(theme::TEXT_DIM));
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(theme::ROW_HEIGHT, |mut row| {
                    row.col(|ui| {
                        ui.add(
                            egui::Label::new(RichText::new(&record.name).size(12.5).strong())
                                .truncate(),
                        );
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(&record.client).color(theme::TEXT_SECONDARY));
                    });
                    row.col(|ui| {
                        ui.spacing_mut().item_spacing.x = 4.0;
                        let down = ui.add(
                            egui::Button::new(RichText::new(icons::TREND_DOWN).size(14.0))
                                .frame(false),
                        );
                        if down.on_hover_text(format!("-{progress_step}%")).clicked() {
                            action = ProjectTableAction::AdjustProgress(record.id, -progress_step);
                        }
                        ui.add(
                            egui::ProgressBar::new(f32::from(record.progress) / 100.0)
                                .desired_width(100.0)
                                .fill(theme::ACCENT)
                                .rounding(egui::Rounding::same(3.0)),
                        );
                        ui.label(RichText::new(format_percent(record.progress)).size(11.0));
                        let up = ui.add(
                            egui::Button::new(RichText::new(icons::TREND_UP).size(14.0))
                                .frame(false),
                        );
                        if up.on_hover_text(format!("+{progress_step}%")).clicked() {
                            action = ProjectTableAction::AdjustProgress(record.id, progress_step);
                        }
                    });
                    row.col(|ui| {
                        status_chip(ui, record);
                    });
                    row.col(|ui| {
                        ui.label(RichText::new(record.team.to_string()).strong());
                    });
                    row.col(|ui| {
                        ui.label(
                            RichText::new(format_amount(currency_symbol, record.budget))
                                .strong()
                                .color(theme::BUDGET_TEXT),
                        );
                    });
                    row.col(|ui| {
                        ui.label(&record.deadline);
                    });
                    row.col(|ui| {
                        let edit = ui.add(
                            egui::Button::new(RichText::new(icons::PENCIL_SIMPLE).size(14.0))
                                .frame(false),
                        );
                        if edit.on_hover_text("Edit project").clicked() {
                            action = ProjectTableAction::Edit(record.id);
                        }
                        let delete = ui.add(
                            egui::Button::new(
                                RichText::new(icons::TRASH).size(14.0).color(theme::DANGER),
                            )
                            .frame(false),
                        );
                        if delete.on_hover_text("Delete project").clicked() {
                            action = ProjectTableAction::Delete(record.id);
                        }
                    });
                });
            }
        });

    if records.is_empty() {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            ui.label(RichText::new("No projects yet").color(theme::TEXT_DIM));
        });
    }

    action
}

/// Small rounded label colored by status.
fn status_chip(ui: &mut Ui, record: &ProjectRecord) {
    egui::Frame::none()
        .fill(theme::status_color(record.status))
        .rounding(egui::Rounding::same(10.0))
        .inner_margin(egui::Margin::symmetric(8.0, 2.0))
        .show(ui, |ui| {
            ui.label(
                RichText::new(record.status.label())
                    .size(11.0)
                    .color(Color32::WHITE),
            );
        });
}
