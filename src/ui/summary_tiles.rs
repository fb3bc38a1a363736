use crate::model::Summary;
use crate::ui::format::format_amount;
use crate::ui::theme;
use egui::{Color32, RichText, Ui};
use egui_phosphor::regular as icons;

/// Render the row of four summary tiles.
pub fn show_summary_tiles(summary: &Summary, currency_symbol: &str, ui: &mut Ui) {
    let tiles = [
        (icons::TARGET, summary.total_count.to_string(), "Total Projects", theme::TILE_TOTAL),
        (icons::HOURGLASS, summary.active_count.to_string(), "Active Projects", theme::TILE_ACTIVE),
        (icons::CHECK_CIRCLE, summary.completed_count.to_string(), "Completed", theme::TILE_COMPLETED),
        (
            icons::WALLET,
            format_amount(currency_symbol, summary.total_budget),
            "Total Budget",
            theme::TILE_BUDGET,
        ),
    ];

    ui.columns(tiles.len(), |columns| {
        for (col, (icon, value, label, accent)) in columns.iter_mut().zip(tiles) {
            tile(col, icon, &value, label, accent);
        }
    });
}

fn tile(ui: &mut Ui, icon: &str, value: &str, label: &str, accent: Color32) {
    let frame = egui::Frame {
        fill: theme::BG_HEADER,
        rounding: egui::Rounding::same(8.0),
        inner_margin: egui::Margin::same(12.0),
        outer_margin: egui::Margin::ZERO,
        stroke: egui::Stroke::NONE,
        shadow: egui::epaint::Shadow::NONE,
    };

    frame.show(ui, |ui| {
        ui.set_min_height(theme::TILE_HEIGHT - 24.0);
        ui.horizontal(|ui| {
            // Icon badge
            let badge = egui::Frame {
                fill: accent.gamma_multiply(0.25),
                rounding: egui::Rounding::same(8.0),
                inner_margin: egui::Margin::same(8.0),
                outer_margin: egui::Margin::ZERO,
                stroke: egui::Stroke::NONE,
                shadow: egui::epaint::Shadow::NONE,
            };
            badge.show(ui, |ui| {
                ui.label(RichText::new(icon).size(20.0).color(accent));
            });

            ui.vertical(|ui| {
                ui.label(
                    RichText::new(value)
                        .font(theme::font_tile_value())
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.label(RichText::new(label).size(12.0).color(theme::TEXT_SECONDARY));
            });
        });
    });
}
