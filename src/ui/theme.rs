use egui::{Color32, FontId, Rounding, Stroke, Visuals};

use crate::model::ProjectStatus;

// ── Palette ──────────────────────────────────────────────────────────────────

pub const BG_DARK: Color32 = Color32::from_rgb(24, 24, 32);
pub const BG_PANEL: Color32 = Color32::from_rgb(30, 30, 40);
pub const BG_HEADER: Color32 = Color32::from_rgb(34, 37, 48);
pub const BG_FIELD: Color32 = Color32::from_rgb(20, 20, 28);
pub const BG_SELECTED: Color32 = Color32::from_rgba_premultiplied(80, 140, 220, 45);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(50, 52, 64);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(230, 232, 240);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(155, 160, 178);
pub const TEXT_DIM: Color32 = Color32::from_rgb(100, 105, 120);

pub const ACCENT: Color32 = Color32::from_rgb(80, 140, 220);
pub const DANGER: Color32 = Color32::from_rgb(229, 62, 62);
pub const BUDGET_TEXT: Color32 = Color32::from_rgb(72, 187, 120);

// ── Summary tiles ────────────────────────────────────────────────────────────

pub const TILE_TOTAL: Color32 = Color32::from_rgb(90, 103, 216);
pub const TILE_ACTIVE: Color32 = Color32::from_rgb(214, 158, 46);
pub const TILE_COMPLETED: Color32 = Color32::from_rgb(56, 161, 105);
pub const TILE_BUDGET: Color32 = Color32::from_rgb(229, 62, 62);

// ── Sizes ────────────────────────────────────────────────────────────────────

pub const STATUS_BAR_HEIGHT: f32 = 24.0;
pub const TILE_HEIGHT: f32 = 72.0;
pub const ROW_HEIGHT: f32 = 30.0;
pub const DIALOG_WIDTH: f32 = 460.0;

// ── Fonts ────────────────────────────────────────────────────────────────────

pub fn font_title() -> FontId {
    FontId::proportional(22.0)
}

pub fn font_tile_value() -> FontId {
    FontId::proportional(20.0)
}

pub fn font_status() -> FontId {
    FontId::proportional(11.0)
}

pub fn font_menu() -> FontId {
    FontId::proportional(13.0)
}

// ── Status chips ─────────────────────────────────────────────────────────────

/// Chip fill for a project status.
pub fn status_color(status: ProjectStatus) -> Color32 {
    match status {
        ProjectStatus::Completed => Color32::from_rgb(46, 125, 50), // success
        ProjectStatus::InProgress => Color32::from_rgb(25, 118, 210), // primary
        ProjectStatus::Planning => Color32::from_rgb(237, 108, 2),  // warning
        ProjectStatus::OnHold => Color32::from_rgb(97, 97, 97),     // default
    }
}

// ── Apply custom visuals ─────────────────────────────────────────────────────

pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = Visuals::dark();

    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_FIELD; // TextEdit bg

    visuals.widgets.noninteractive.bg_fill = BG_PANEL;
    visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT_SECONDARY);
    visuals.widgets.noninteractive.rounding = Rounding::same(4.0);

    visuals.widgets.inactive.bg_fill = Color32::from_rgb(42, 44, 56);
    visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.inactive.rounding = Rounding::same(4.0);

    visuals.widgets.hovered.bg_fill = Color32::from_rgb(52, 54, 68);
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, TEXT_PRIMARY);
    visuals.widgets.hovered.rounding = Rounding::same(4.0);

    visuals.widgets.active.bg_fill = Color32::from_rgb(60, 62, 76);
    visuals.widgets.active.bg_stroke = Stroke::new(1.0, ACCENT);
    visuals.widgets.active.fg_stroke = Stroke::new(2.0, Color32::WHITE);
    visuals.widgets.active.rounding = Rounding::same(4.0);

    visuals.selection.bg_fill = BG_SELECTED;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    visuals.window_rounding = Rounding::same(8.0);
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.striped = false;

    ctx.set_visuals(visuals);

    let mut style = (*ctx.style()).clone();
    style.spacing.item_spacing = egui::vec2(8.0, 4.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    ctx.set_style(style);
}
