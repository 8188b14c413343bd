use bevy_egui::{egui, EguiContexts};

/// Applies the light dashboard style to the egui context.
pub fn apply_light_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();

    // Light slate palette
    let panel = egui::Color32::from_rgb(241, 245, 249);
    let card = egui::Color32::WHITE;
    let inactive = egui::Color32::from_rgb(248, 250, 252);
    let hover = egui::Color32::from_rgb(226, 232, 240);
    let active = egui::Color32::from_rgb(59, 130, 246);
    let text = egui::Color32::from_rgb(30, 41, 59);

    style.visuals.dark_mode = false;
    style.visuals.override_text_color = Some(text);
    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = card;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = card;
    style.visuals.faint_bg_color = inactive;

    // Selection highlight
    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, active);

    let window_rounding = egui::CornerRadius::same(8);
    let widget_rounding = egui::CornerRadius::same(6);

    style.visuals.window_corner_radius = window_rounding;
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    ctx.set_style(style);
}
