//! Top-level dashboard layout.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::flow::DAILY_FLOW;
use model::kpi::IMPACT_KPIS;
use model::report_clock::ReportClock;
use model::zones::WASTE_ZONES;

use crate::flow_diagram;
use crate::footer;
use crate::kpi_cards;
use crate::zone_map::{self, SelectedZone};

/// Panel width below which the map and flow panels stack vertically.
const TWO_COLUMN_MIN_WIDTH: f32 = 980.0;

const HEADING_INK: egui::Color32 = egui::Color32::from_rgb(30, 41, 59);
const ACCENT_ORANGE: egui::Color32 = egui::Color32::from_rgb(249, 115, 22);

/// Renders the whole dashboard into the central panel.
pub fn dashboard_ui(
    mut contexts: EguiContexts,
    mut selection: ResMut<SelectedZone>,
    clock: Res<ReportClock>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            render_header(ui);
            ui.add_space(12.0);
            kpi_cards::render_kpi_row(ui, &IMPACT_KPIS);
            ui.add_space(16.0);

            if ui.available_width() >= TWO_COLUMN_MIN_WIDTH {
                ui.columns(2, |cols| {
                    zone_map::render_map_panel(&mut cols[0], &WASTE_ZONES, &mut selection);
                    flow_diagram::render_flow_panel(&mut cols[1], &DAILY_FLOW);
                });
            } else {
                zone_map::render_map_panel(ui, &WASTE_ZONES, &mut selection);
                ui.add_space(16.0);
                flow_diagram::render_flow_panel(ui, &DAILY_FLOW);
            }

            ui.add_space(16.0);
            footer::render_footer(ui, &clock);
        });
    });

    // The popup floats above the panel hierarchy.
    zone_map::render_selection_popup(contexts.ctx_mut(), &WASTE_ZONES, &mut selection);
}

/// Page heading with the accent rule beneath it.
fn render_header(ui: &mut egui::Ui) {
    ui.label(
        egui::RichText::new("OPERATIONAL IMPACT")
            .size(30.0)
            .strong()
            .color(HEADING_INK),
    );
    ui.add_space(4.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(128.0, 4.0), egui::Sense::hover());
    ui.painter().rect_filled(rect, 2.0, ACCENT_ORANGE);
}
