//! Headline KPI cards.

use bevy_egui::egui;

use model::kpi::ImpactKpis;

use crate::formatting::fmt_pct;

const CARD_TITLE_INK: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const CARD_CAPTION_GRAY: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);

/// Figure colors per card, in display order.
const CARD_COLORS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(22, 163, 74),
    egui::Color32::from_rgb(37, 99, 235),
    egui::Color32::from_rgb(234, 88, 12),
];

/// Renders the three KPI cards in one row.
pub fn render_kpi_row(ui: &mut egui::Ui, kpis: &ImpactKpis) {
    let cards = kpis.cards();
    ui.columns(3, |cols| {
        for (col, ((value, title, caption), color)) in
            cols.iter_mut().zip(cards.into_iter().zip(CARD_COLORS))
        {
            render_kpi_card(col, value, title, caption, color);
        }
    });
}

fn render_kpi_card(
    ui: &mut egui::Ui,
    value: u8,
    title: &str,
    caption: &str,
    color: egui::Color32,
) {
    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(20))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(fmt_pct(value))
                        .size(44.0)
                        .strong()
                        .color(color),
                );
                ui.add_space(4.0);
                ui.label(
                    egui::RichText::new(title)
                        .size(16.0)
                        .strong()
                        .color(CARD_TITLE_INK),
                );
                ui.label(
                    egui::RichText::new(caption)
                        .size(11.0)
                        .color(CARD_CAPTION_GRAY),
                );
            });
        });
}
