//! Sankey node and band painting.
//!
//! Geometry lives in a logical 400x200 canvas scaled uniformly to the panel
//! width. Band widths are the static per-category constants from
//! `model::flow`, not functions of the tonnages.

use bevy_egui::egui;
use bevy_egui::egui::emath::RectTransform;
use bevy_egui::egui::epaint::QuadraticBezierShape;

use model::flow::{
    WasteFlow, COMPOSTING_BAND_WIDTH, COMPOSTING_SHARE_PCT, LANDFILL_BAND_WIDTH,
    LANDFILL_SHARE_PCT, RECYCLING_BAND_WIDTH, RECYCLING_SHARE_PCT,
};

use crate::formatting::{fmt_pct, fmt_tons};

/// Logical diagram canvas width.
const DIAGRAM_LOGICAL_WIDTH: f32 = 400.0;
/// Logical diagram canvas height.
const DIAGRAM_LOGICAL_HEIGHT: f32 = 200.0;

const COLLECTION_BLUE: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);
const RECYCLING_GREEN: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);
const COMPOSTING_LIME: egui::Color32 = egui::Color32::from_rgb(132, 204, 22);
const LANDFILL_RED: egui::Color32 = egui::Color32::from_rgb(239, 68, 68);
const QUANTITY_GRAY: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);

/// Renders the node-and-band diagram.
pub fn render_flow_diagram(ui: &mut egui::Ui, flow: &WasteFlow) {
    let width = ui.available_width();
    let height = width * DIAGRAM_LOGICAL_HEIGHT / DIAGRAM_LOGICAL_WIDTH;
    let (response, painter) =
        ui.allocate_painter(egui::vec2(width, height), egui::Sense::hover());
    let rect = response.rect;
    let to_screen = RectTransform::from_to(
        egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(DIAGRAM_LOGICAL_WIDTH, DIAGRAM_LOGICAL_HEIGHT),
        ),
        rect,
    );
    let scale = rect.width() / DIAGRAM_LOGICAL_WIDTH;

    // Bands first, so the nodes cover their endpoints.
    paint_band(
        &painter,
        &to_screen,
        scale,
        [(70.0, 90.0), (180.0, 50.0), (290.0, 70.0)],
        RECYCLING_BAND_WIDTH,
        RECYCLING_GREEN,
    );
    paint_band(
        &painter,
        &to_screen,
        scale,
        [(70.0, 100.0), (180.0, 100.0), (290.0, 110.0)],
        COMPOSTING_BAND_WIDTH,
        COMPOSTING_LIME,
    );
    paint_band(
        &painter,
        &to_screen,
        scale,
        [(70.0, 110.0), (180.0, 150.0), (290.0, 150.0)],
        LANDFILL_BAND_WIDTH,
        LANDFILL_RED,
    );

    paint_collection_node(&painter, &to_screen, scale, flow.collection_tons);
    paint_destination_node(
        &painter,
        &to_screen,
        scale,
        (290.0, 50.0),
        "Recycling",
        RECYCLING_GREEN,
        flow.recycling_tons,
        RECYCLING_SHARE_PCT,
    );
    paint_destination_node(
        &painter,
        &to_screen,
        scale,
        (290.0, 95.0),
        "Composting",
        COMPOSTING_LIME,
        flow.composting_tons,
        COMPOSTING_SHARE_PCT,
    );
    paint_destination_node(
        &painter,
        &to_screen,
        scale,
        (290.0, 140.0),
        "Landfill",
        LANDFILL_RED,
        flow.landfill_tons,
        LANDFILL_SHARE_PCT,
    );
}

fn paint_band(
    painter: &egui::Painter,
    to_screen: &RectTransform,
    scale: f32,
    points: [(f32, f32); 3],
    width: f32,
    color: egui::Color32,
) {
    let [start, control, end] = points.map(|(x, y)| to_screen.transform_pos(egui::pos2(x, y)));
    painter.add(QuadraticBezierShape::from_points_stroke(
        [start, control, end],
        false,
        egui::Color32::TRANSPARENT,
        egui::Stroke::new(width * scale, color.gamma_multiply(0.6)),
    ));
}

fn paint_collection_node(
    painter: &egui::Painter,
    to_screen: &RectTransform,
    scale: f32,
    tons: f32,
) {
    let node = egui::Rect::from_two_pos(
        to_screen.transform_pos(egui::pos2(10.0, 80.0)),
        to_screen.transform_pos(egui::pos2(70.0, 120.0)),
    );
    painter.rect_filled(node, 4.0, COLLECTION_BLUE);
    painter.text(
        node.center(),
        egui::Align2::CENTER_CENTER,
        "Collection",
        egui::FontId::proportional(12.0 * scale),
        egui::Color32::WHITE,
    );
    // Tonnage sits under the node, outside it
    painter.text(
        to_screen.transform_pos(egui::pos2(40.0, 135.0)),
        egui::Align2::CENTER_CENTER,
        fmt_tons(tons),
        egui::FontId::proportional(11.0 * scale),
        QUANTITY_GRAY,
    );
}

#[allow(clippy::too_many_arguments)]
fn paint_destination_node(
    painter: &egui::Painter,
    to_screen: &RectTransform,
    scale: f32,
    top_left: (f32, f32),
    label: &str,
    color: egui::Color32,
    tons: f32,
    share_pct: u8,
) {
    let node = egui::Rect::from_two_pos(
        to_screen.transform_pos(egui::pos2(top_left.0, top_left.1)),
        to_screen.transform_pos(egui::pos2(top_left.0 + 80.0, top_left.1 + 40.0)),
    );
    painter.rect_filled(node, 4.0, color);
    painter.text(
        node.center() - egui::vec2(0.0, 8.0 * scale),
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(11.0 * scale),
        egui::Color32::WHITE,
    );
    painter.text(
        node.center() + egui::vec2(0.0, 8.0 * scale),
        egui::Align2::CENTER_CENTER,
        format!("{} ({})", fmt_tons(tons), fmt_pct(share_pct)),
        egui::FontId::proportional(10.0 * scale),
        egui::Color32::WHITE,
    );
}
