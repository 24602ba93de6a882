use egui::{Color32, FontFamily, FontId, Stroke, TextStyle, Visuals};

pub const BG_BLACK: Color32 = Color32::from_rgb(0, 0, 0);
pub const BG_PANEL: Color32 = Color32::from_rgb(22, 23, 27);
pub const BG_WIDGET: Color32 = Color32::from_rgb(34, 36, 42);
pub const BG_WIDGET_HOVER: Color32 = Color32::from_rgb(46, 49, 58);

pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(190, 192, 198);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(112, 115, 124);

pub const ACCENT_AMBER: Color32 = Color32::from_rgb(232, 168, 48);
pub const ACCENT_TEAL: Color32 = Color32::from_rgb(48, 170, 180);
pub const ACCENT_RED: Color32 = Color32::from_rgb(190, 60, 60);

pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(52, 55, 64);

/// Dark panel style matched to the grey viewport clear color.
pub fn apply_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    let mut visuals = Visuals::dark();
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_PANEL;
    visuals.window_fill = BG_PANEL;
    visuals.extreme_bg_color = BG_BLACK;
    visuals.faint_bg_color = BG_WIDGET;
    visuals.window_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    visuals.selection.bg_fill = ACCENT_TEAL.gamma_multiply(0.5);
    visuals.selection.stroke = Stroke::new(1.0, ACCENT_TEAL);
    visuals.error_fg_color = ACCENT_RED;
    visuals.warn_fg_color = ACCENT_AMBER;

    for widget in [
        &mut visuals.widgets.inactive,
        &mut visuals.widgets.noninteractive,
    ] {
        widget.bg_fill = BG_WIDGET;
        widget.weak_bg_fill = BG_WIDGET;
        widget.bg_stroke = Stroke::new(1.0, BORDER_SUBTLE);
    }
    visuals.widgets.hovered.bg_fill = BG_WIDGET_HOVER;
    visuals.widgets.hovered.weak_bg_fill = BG_WIDGET_HOVER;
    visuals.widgets.hovered.bg_stroke = Stroke::new(1.0, ACCENT_TEAL);
    visuals.widgets.active.bg_stroke = Stroke::new(2.0, ACCENT_AMBER);

    style.visuals = visuals;

    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(8.0, 4.0);
    style.spacing.slider_width = 170.0;

    style.text_styles = [
        (TextStyle::Small, FontId::new(11.0, FontFamily::Proportional)),
        (TextStyle::Body, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Button, FontId::new(13.0, FontFamily::Proportional)),
        (TextStyle::Heading, FontId::new(18.0, FontFamily::Proportional)),
        (TextStyle::Monospace, FontId::new(12.0, FontFamily::Monospace)),
    ]
    .into();

    ctx.set_style(style);
}
