//! Mass-flow panel: Sankey-style nodes and bands, the computed diversion
//! rate, and the tonnage breakdown strip.

mod diagram;
mod summary;
mod tests;

use bevy_egui::egui;

use model::flow::WasteFlow;

const PANEL_TITLE_BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

/// Renders the framed flow panel.
pub fn render_flow_panel(ui: &mut egui::Ui, flow: &WasteFlow) {
    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(16))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("2. SANKEY DIAGRAM (MFA)")
                    .size(20.0)
                    .strong()
                    .color(PANEL_TITLE_BLUE),
            );
            ui.add_space(8.0);
            diagram::render_flow_diagram(ui, flow);
            ui.add_space(12.0);
            summary::render_diversion_summary(ui, flow);
            ui.add_space(8.0);
            summary::render_breakdown_strip(ui, flow);
        });
}
