//! Zone map panel: schematic district map, clickable markers, zone list,
//! and the selection popup.
//!
//! The map paints into a logical 600x500 canvas scaled uniformly to the
//! panel width. Map markers and zone-list rows are both click targets for
//! the same selection resource, so either entry point produces identical
//! state.

mod base_map;
mod markers;
mod popup;
mod tests;
mod zone_list;

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use model::zones::{FillTier, WasteZone};

pub use popup::render_selection_popup;

/// Logical map-canvas width markers are positioned in.
pub const MAP_LOGICAL_WIDTH: f32 = 600.0;
/// Logical map-canvas height markers are positioned in.
pub const MAP_LOGICAL_HEIGHT: f32 = 500.0;

const PANEL_TITLE_BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);

/// Currently selected zone, if any. Mutated only by the click handlers and
/// the dismiss controls; read only by the popup renderer.
#[derive(Resource, Default)]
pub struct SelectedZone(pub Option<u32>);

impl SelectedZone {
    /// Selects a zone, replacing any prior selection.
    pub fn select(&mut self, id: u32) {
        self.0 = Some(id);
    }

    /// Clears the selection.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn selected(&self) -> Option<u32> {
        self.0
    }
}

/// Marker and swatch color for a fill tier.
pub fn tier_color(tier: FillTier) -> egui::Color32 {
    match tier {
        FillTier::Critical => egui::Color32::from_rgb(220, 38, 38),
        FillTier::High => egui::Color32::from_rgb(234, 88, 12),
        FillTier::Normal => egui::Color32::from_rgb(22, 163, 74),
    }
}

/// Renders the framed map panel: title, canvas, zone list.
pub fn render_map_panel(ui: &mut egui::Ui, zones: &[WasteZone], selection: &mut SelectedZone) {
    egui::Frame::new()
        .fill(egui::Color32::WHITE)
        .inner_margin(egui::Margin::same(16))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new("1. GEOSPATIAL HEATMAP")
                    .size(20.0)
                    .strong()
                    .color(PANEL_TITLE_BLUE),
            );
            ui.add_space(8.0);
            render_map_canvas(ui, zones, selection);
            ui.add_space(12.0);
            zone_list::render_zone_list(ui, zones, selection);
        });
}

/// Paints the map canvas and resolves marker clicks.
fn render_map_canvas(ui: &mut egui::Ui, zones: &[WasteZone], selection: &mut SelectedZone) {
    let width = ui.available_width();
    let height = width * MAP_LOGICAL_HEIGHT / MAP_LOGICAL_WIDTH;
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, height), egui::Sense::click());
    let rect = response.rect;
    let to_screen = egui::emath::RectTransform::from_to(
        egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(MAP_LOGICAL_WIDTH, MAP_LOGICAL_HEIGHT),
        ),
        rect,
    );
    let scale = rect.width() / MAP_LOGICAL_WIDTH;

    base_map::paint_base_map(&painter, rect, &to_screen, scale);
    markers::paint_zone_markers(&painter, &to_screen, scale, zones);

    if response.clicked() {
        if let Some(pointer) = response.interact_pointer_pos() {
            let logical = to_screen.inverse().transform_pos(pointer);
            if let Some(zone) = markers::hit_test(zones, logical) {
                selection.select(zone.id);
            }
        }
    }
}

/// Clears the selection on Escape. Skipped while egui owns keyboard focus.
pub fn dismiss_keybind(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut contexts: EguiContexts,
    mut selection: ResMut<SelectedZone>,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }
    if keyboard.just_pressed(KeyCode::Escape) {
        selection.clear();
    }
}
