//! Static district base map: boundary, river, roads, labels, compass,
//! legend.
//!
//! Pure decoration; nothing here reads state. Geometry lives in logical
//! 600x500 canvas units and is transformed to screen space per frame.

use bevy_egui::egui;
use bevy_egui::egui::emath::RectTransform;
use bevy_egui::egui::epaint::QuadraticBezierShape;

const PARCHMENT: egui::Color32 = egui::Color32::from_rgb(254, 243, 199);
const DISTRICT_FILL: egui::Color32 = egui::Color32::from_rgb(245, 222, 179);
const DISTRICT_EDGE: egui::Color32 = egui::Color32::from_rgb(139, 105, 20);
const RIVER_BLUE: egui::Color32 = egui::Color32::from_rgb(37, 99, 235);
const HIGHWAY_YELLOW: egui::Color32 = egui::Color32::from_rgb(251, 191, 36);
const RING_ROAD_GRAY: egui::Color32 = egui::Color32::from_rgb(148, 163, 184);
const INK: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
const MUTED: egui::Color32 = egui::Color32::from_rgb(100, 116, 139);
const COMPASS_RED: egui::Color32 = egui::Color32::from_rgb(220, 38, 38);

/// District boundary outline, clockwise from the northwest.
const DISTRICT_BOUNDARY: [(f32, f32); 19] = [
    (100.0, 80.0),
    (150.0, 60.0),
    (220.0, 70.0),
    (280.0, 85.0),
    (340.0, 75.0),
    (400.0, 90.0),
    (450.0, 120.0),
    (480.0, 180.0),
    (490.0, 250.0),
    (470.0, 320.0),
    (430.0, 370.0),
    (370.0, 410.0),
    (290.0, 430.0),
    (220.0, 420.0),
    (160.0, 390.0),
    (120.0, 340.0),
    (90.0, 270.0),
    (85.0, 200.0),
    (90.0, 140.0),
];

/// Paints the full static base map into `rect`.
pub fn paint_base_map(
    painter: &egui::Painter,
    rect: egui::Rect,
    to_screen: &RectTransform,
    scale: f32,
) {
    let at = |x: f32, y: f32| to_screen.transform_pos(egui::pos2(x, y));

    painter.rect_filled(rect, 8.0, PARCHMENT);

    // District boundary
    let boundary: Vec<egui::Pos2> = DISTRICT_BOUNDARY.iter().map(|&(x, y)| at(x, y)).collect();
    painter.add(egui::Shape::convex_polygon(
        boundary.clone(),
        DISTRICT_FILL,
        egui::Stroke::NONE,
    ));
    painter.add(egui::Shape::closed_line(
        boundary,
        egui::Stroke::new(3.0 * scale, DISTRICT_EDGE),
    ));

    // Khan river, two quadratic segments
    let river_stroke = egui::Stroke::new(8.0 * scale, RIVER_BLUE);
    painter.add(QuadraticBezierShape::from_points_stroke(
        [at(110.0, 120.0), at(200.0, 140.0), at(300.0, 155.0)],
        false,
        egui::Color32::TRANSPARENT,
        river_stroke,
    ));
    painter.add(QuadraticBezierShape::from_points_stroke(
        [at(300.0, 155.0), at(400.0, 170.0), at(480.0, 190.0)],
        false,
        egui::Color32::TRANSPARENT,
        river_stroke,
    ));

    // Major roads
    let highway_stroke = egui::Stroke::new(8.0 * scale, HIGHWAY_YELLOW);
    painter.line_segment([at(90.0, 260.0), at(490.0, 280.0)], highway_stroke);
    painter.line_segment([at(300.0, 70.0), at(280.0, 430.0)], highway_stroke);

    // Ring road
    painter.circle_stroke(
        at(300.0, 280.0),
        100.0 * scale,
        egui::Stroke::new(5.0 * scale, RING_ROAD_GRAY),
    );

    // Town labels
    let town_font = egui::FontId::proportional(20.0 * scale);
    painter.text(
        at(140.0, 100.0),
        egui::Align2::LEFT_BOTTOM,
        "Depalpur",
        town_font.clone(),
        INK,
    );
    painter.text(
        at(410.0, 130.0),
        egui::Align2::LEFT_BOTTOM,
        "Sanwer",
        town_font.clone(),
        INK,
    );
    painter.text(at(240.0, 400.0), egui::Align2::LEFT_BOTTOM, "Mhow", town_font, INK);

    // Central Indore
    painter.circle_filled(at(300.0, 280.0), 15.0 * scale, INK);
    painter.text(
        at(300.0, 320.0),
        egui::Align2::CENTER_BOTTOM,
        "INDORE",
        egui::FontId::proportional(32.0 * scale),
        INK,
    );

    paint_title_box(painter, to_screen, scale);
    paint_compass(painter, to_screen, scale);
    paint_legend(painter, to_screen, scale);
}

fn paint_title_box(painter: &egui::Painter, to_screen: &RectTransform, scale: f32) {
    let at = |x: f32, y: f32| to_screen.transform_pos(egui::pos2(x, y));

    let frame = egui::Rect::from_two_pos(at(20.0, 20.0), at(200.0, 80.0));
    painter.rect_filled(frame, 5.0, egui::Color32::WHITE);
    painter.rect_stroke(
        frame,
        5.0,
        egui::Stroke::new(2.0 * scale, DISTRICT_EDGE),
        egui::StrokeKind::Inside,
    );
    painter.text(
        at(110.0, 45.0),
        egui::Align2::CENTER_BOTTOM,
        "INDORE",
        egui::FontId::proportional(24.0 * scale),
        INK,
    );
    painter.text(
        at(110.0, 65.0),
        egui::Align2::CENTER_BOTTOM,
        "DISTRICT",
        egui::FontId::proportional(18.0 * scale),
        MUTED,
    );
}

fn paint_compass(painter: &egui::Painter, to_screen: &RectTransform, scale: f32) {
    let center = to_screen.transform_pos(egui::pos2(540.0, 50.0));

    painter.circle_filled(center, 30.0 * scale, egui::Color32::WHITE);
    painter.circle_stroke(center, 30.0 * scale, egui::Stroke::new(2.0 * scale, INK));

    // Needle offsets are relative to the compass center
    let needle: Vec<egui::Pos2> = [(0.0, -22.0), (-8.0, 12.0), (0.0, 8.0), (8.0, 12.0)]
        .iter()
        .map(|&(dx, dy)| center + egui::vec2(dx * scale, dy * scale))
        .collect();
    painter.add(egui::Shape::convex_polygon(
        needle,
        COMPASS_RED,
        egui::Stroke::NONE,
    ));
    painter.text(
        center + egui::vec2(0.0, -28.0 * scale),
        egui::Align2::CENTER_BOTTOM,
        "N",
        egui::FontId::proportional(16.0 * scale),
        INK,
    );
}

fn paint_legend(painter: &egui::Painter, to_screen: &RectTransform, scale: f32) {
    let at = |x: f32, y: f32| to_screen.transform_pos(egui::pos2(x, y));

    let frame = egui::Rect::from_two_pos(at(20.0, 380.0), at(220.0, 480.0));
    painter.rect_filled(frame, 5.0, egui::Color32::WHITE);
    painter.rect_stroke(
        frame,
        5.0,
        egui::Stroke::new(2.0 * scale, DISTRICT_EDGE),
        egui::StrokeKind::Inside,
    );

    painter.text(
        at(30.0, 400.0),
        egui::Align2::LEFT_BOTTOM,
        "LEGEND",
        egui::FontId::proportional(16.0 * scale),
        INK,
    );

    let label_font = egui::FontId::proportional(14.0 * scale);
    painter.line_segment(
        [at(30.0, 415.0), at(70.0, 415.0)],
        egui::Stroke::new(5.0 * scale, HIGHWAY_YELLOW),
    );
    painter.text(
        at(80.0, 420.0),
        egui::Align2::LEFT_BOTTOM,
        "Highway",
        label_font.clone(),
        INK,
    );

    painter.line_segment(
        [at(30.0, 435.0), at(70.0, 435.0)],
        egui::Stroke::new(5.0 * scale, RIVER_BLUE),
    );
    painter.text(
        at(80.0, 440.0),
        egui::Align2::LEFT_BOTTOM,
        "River",
        label_font.clone(),
        INK,
    );

    painter.circle_filled(at(50.0, 455.0), 8.0 * scale, COMPASS_RED);
    painter.text(
        at(80.0, 460.0),
        egui::Align2::LEFT_BOTTOM,
        "Hotspot",
        label_font,
        INK,
    );
}
