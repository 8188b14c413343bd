//! Always-visible zone list; each row mirrors the map marker as a click
//! target for the same selection.

use bevy_egui::egui;

use model::zones::WasteZone;

use crate::formatting::fmt_pct;

use super::{tier_color, SelectedZone};

const ROW_FILL: egui::Color32 = egui::Color32::from_rgb(248, 250, 252);
const ROW_FILL_SELECTED: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
const ROW_EDGE: egui::Color32 = egui::Color32::from_rgb(226, 232, 240);
const ROW_INK: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);

/// Renders the zone list as a two-column grid of clickable rows.
pub fn render_zone_list(ui: &mut egui::Ui, zones: &[WasteZone], selection: &mut SelectedZone) {
    let row_width = (ui.available_width() - 8.0) / 2.0;
    for pair in zones.chunks(2) {
        ui.horizontal(|ui| {
            for zone in pair {
                render_zone_row(ui, zone, row_width, selection);
            }
        });
        ui.add_space(6.0);
    }
}

fn render_zone_row(
    ui: &mut egui::Ui,
    zone: &WasteZone,
    row_width: f32,
    selection: &mut SelectedZone,
) {
    let is_selected = selection.selected() == Some(zone.id);
    let fill = if is_selected { ROW_FILL_SELECTED } else { ROW_FILL };

    let inner = egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(2.0, ROW_EDGE))
        .inner_margin(egui::Margin::same(8))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.set_width(row_width - 20.0);
            ui.horizontal(|ui| {
                let (swatch, _) =
                    ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
                ui.painter()
                    .circle_filled(swatch.center(), 7.0, tier_color(zone.tier()));
                ui.label(egui::RichText::new(zone.name).strong().color(ROW_INK));
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(fmt_pct(zone.fill_rate))
                            .strong()
                            .color(ROW_INK),
                    );
                });
            });
        });

    // The whole row is the click target, same mutation as the map marker.
    if inner.response.interact(egui::Sense::click()).clicked() {
        selection.select(zone.id);
    }
}
