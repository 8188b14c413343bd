//! Selection detail popup.

use bevy_egui::egui;

use model::zones::WasteZone;

use super::{tier_color, SelectedZone};

const POPUP_EDGE_BLUE: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const POPUP_INK: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);

/// Renders the detail card for the selected zone, if any: zone name, numeric
/// fill rate, and the tier label in the tier color.
pub fn render_selection_popup(
    ctx: &egui::Context,
    zones: &[WasteZone],
    selection: &mut SelectedZone,
) {
    let Some(zone) = selection
        .selected()
        .and_then(|id| zones.iter().find(|zone| zone.id == id))
    else {
        return;
    };

    let tier = zone.tier();
    egui::Window::new("zone_detail")
        .title_bar(false)
        .resizable(false)
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-32.0, 220.0))
        .frame(
            egui::Frame::new()
                .fill(egui::Color32::WHITE)
                .stroke(egui::Stroke::new(3.0, POPUP_EDGE_BLUE))
                .inner_margin(egui::Margin::same(14))
                .corner_radius(egui::CornerRadius::same(8)),
        )
        .show(ctx, |ui| {
            ui.set_min_width(180.0);
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(zone.name)
                        .size(18.0)
                        .strong()
                        .color(POPUP_INK),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(egui::RichText::new("\u{00d7}").size(16.0)).clicked() {
                        selection.clear();
                    }
                });
            });
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                ui.label("Fill Rate:");
                ui.label(
                    egui::RichText::new(format!("{}%", zone.fill_rate))
                        .size(16.0)
                        .strong()
                        .color(POPUP_INK),
                );
            });
            ui.horizontal(|ui| {
                ui.label("Status:");
                ui.colored_label(
                    tier_color(tier),
                    egui::RichText::new(tier.label()).size(15.0).strong(),
                );
            });
        });
}
