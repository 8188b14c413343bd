//! Zone marker glyphs and hit testing.

use bevy_egui::egui;
use bevy_egui::egui::emath::RectTransform;

use model::zones::WasteZone;

use super::tier_color;

/// Hit radius around a marker center, in logical canvas units. Matches the
/// outer halo radius.
pub const MARKER_HIT_RADIUS: f32 = 18.0;

const HALO_RADIUS: f32 = 18.0;
const CORE_RADIUS: f32 = 10.0;
const DOT_RADIUS: f32 = 4.0;

/// Paints one three-ring glyph per zone: soft halo, solid core with a white
/// ring, white center dot.
pub fn paint_zone_markers(
    painter: &egui::Painter,
    to_screen: &RectTransform,
    scale: f32,
    zones: &[WasteZone],
) {
    for zone in zones {
        let center = to_screen.transform_pos(egui::pos2(zone.x, zone.y));
        let color = tier_color(zone.tier());

        painter.circle_filled(center, HALO_RADIUS * scale, color.gamma_multiply(0.3));
        painter.circle(
            center,
            CORE_RADIUS * scale,
            color,
            egui::Stroke::new(3.0 * scale, egui::Color32::WHITE),
        );
        painter.circle_filled(center, DOT_RADIUS * scale, egui::Color32::WHITE);
    }
}

/// Returns the zone whose marker contains `logical`, preferring the nearest
/// center when halos overlap.
pub fn hit_test(zones: &[WasteZone], logical: egui::Pos2) -> Option<&WasteZone> {
    zones
        .iter()
        .map(|zone| {
            let delta = egui::pos2(zone.x, zone.y) - logical;
            (zone, delta.length_sq())
        })
        .filter(|(_, dist_sq)| *dist_sq <= MARKER_HIT_RADIUS * MARKER_HIT_RADIUS)
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(zone, _)| zone)
}
