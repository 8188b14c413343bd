//! Diversion-rate summary box and the tonnage breakdown strip.

use bevy_egui::egui;

use model::flow::{WasteFlow, TARGET_COMPARISON_CAPTION};

use crate::formatting::fmt_tons;

const SUMMARY_FILL: egui::Color32 = egui::Color32::from_rgb(240, 253, 244);
const SUMMARY_EDGE: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
const SUMMARY_GREEN: egui::Color32 = egui::Color32::from_rgb(22, 163, 74);
const CAPTION_GRAY: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);

/// Renders the computed total diversion rate with the static target caption.
pub fn render_diversion_summary(ui: &mut egui::Ui, flow: &WasteFlow) {
    egui::Frame::new()
        .fill(SUMMARY_FILL)
        .stroke(egui::Stroke::new(2.0, SUMMARY_EDGE))
        .inner_margin(egui::Margin::same(12))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new("Total Diversion Rate")
                        .size(12.0)
                        .color(CAPTION_GRAY),
                );
                ui.label(
                    egui::RichText::new(format!("{}%", flow.diversion_rate_display()))
                        .size(34.0)
                        .strong()
                        .color(SUMMARY_GREEN),
                );
                ui.label(
                    egui::RichText::new(TARGET_COMPARISON_CAPTION)
                        .size(10.0)
                        .color(CAPTION_GRAY),
                );
            });
        });
}

/// Renders the three-tile strip duplicating the non-collection tonnages.
pub fn render_breakdown_strip(ui: &mut egui::Ui, flow: &WasteFlow) {
    ui.columns(3, |cols| {
        render_breakdown_tile(
            &mut cols[0],
            "Recycling",
            flow.recycling_tons,
            egui::Color32::from_rgb(240, 253, 244),
            egui::Color32::from_rgb(21, 128, 61),
        );
        render_breakdown_tile(
            &mut cols[1],
            "Composting",
            flow.composting_tons,
            egui::Color32::from_rgb(247, 254, 231),
            egui::Color32::from_rgb(77, 124, 15),
        );
        render_breakdown_tile(
            &mut cols[2],
            "Landfill",
            flow.landfill_tons,
            egui::Color32::from_rgb(254, 242, 242),
            egui::Color32::from_rgb(185, 28, 28),
        );
    });
}

fn render_breakdown_tile(
    ui: &mut egui::Ui,
    label: &str,
    tons: f32,
    fill: egui::Color32,
    ink: egui::Color32,
) {
    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::same(8))
        .corner_radius(egui::CornerRadius::same(6))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(label).size(11.0).strong().color(ink));
                ui.label(
                    egui::RichText::new(fmt_tons(tons))
                        .size(16.0)
                        .strong()
                        .color(ink),
                );
            });
        });
}
