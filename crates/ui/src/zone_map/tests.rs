//! Tests for the zone map module.

#[cfg(test)]
mod tests {
    use bevy_egui::egui;

    use model::zones::{FillTier, WasteZone, WASTE_ZONES};

    use crate::zone_map::markers::{hit_test, MARKER_HIT_RADIUS};
    use crate::zone_map::{tier_color, SelectedZone};

    // =========================================================================
    // Selection lifecycle
    // =========================================================================

    #[test]
    fn test_selection_starts_empty() {
        let selection = SelectedZone::default();
        assert_eq!(selection.selected(), None, "no zone selected at mount");
    }

    #[test]
    fn test_select_replaces_prior_selection() {
        let mut selection = SelectedZone::default();
        selection.select(1);
        selection.select(2);
        assert_eq!(
            selection.selected(),
            Some(2),
            "selecting B after A must leave exactly B"
        );
    }

    #[test]
    fn test_reselecting_same_zone_keeps_it() {
        // Selection overwrites, it does not toggle.
        let mut selection = SelectedZone::default();
        selection.select(3);
        selection.select(3);
        assert_eq!(selection.selected(), Some(3));
    }

    #[test]
    fn test_clear_empties_selection() {
        let mut selection = SelectedZone::default();
        selection.select(5);
        selection.clear();
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_map_and_list_entry_points_agree() {
        // Both the marker click and the list-row click funnel into
        // SelectedZone::select, so the resulting state is identical.
        let mut via_map = SelectedZone::default();
        let mut via_list = SelectedZone::default();
        via_map.select(7);
        via_list.select(7);
        assert_eq!(via_map.selected(), via_list.selected());
    }

    // =========================================================================
    // Tier colors
    // =========================================================================

    #[test]
    fn test_tier_colors_match_policy() {
        assert_eq!(
            tier_color(FillTier::Critical),
            egui::Color32::from_rgb(220, 38, 38)
        );
        assert_eq!(
            tier_color(FillTier::High),
            egui::Color32::from_rgb(234, 88, 12)
        );
        assert_eq!(
            tier_color(FillTier::Normal),
            egui::Color32::from_rgb(22, 163, 74)
        );
    }

    #[test]
    fn test_tier_colors_distinct() {
        let critical = tier_color(FillTier::Critical);
        let high = tier_color(FillTier::High);
        let normal = tier_color(FillTier::Normal);
        assert_ne!(critical, high);
        assert_ne!(high, normal);
        assert_ne!(critical, normal);
    }

    #[test]
    fn test_label_mirrors_color_tier() {
        // One-to-one: each color tier carries exactly its own wording.
        for zone in &WASTE_ZONES {
            let tier = zone.tier();
            let expected = match tier {
                FillTier::Critical => "CRITICAL",
                FillTier::High => "HIGH",
                FillTier::Normal => "NORMAL",
            };
            assert_eq!(tier.label(), expected, "zone {}", zone.name);
        }
    }

    // =========================================================================
    // Marker hit testing
    // =========================================================================

    #[test]
    fn test_hit_on_marker_center() {
        let zone = hit_test(&WASTE_ZONES, egui::pos2(300.0, 280.0))
            .expect("click on Rajwada's center should hit");
        assert_eq!(zone.name, "Rajwada");
    }

    #[test]
    fn test_hit_inside_halo() {
        let offset = MARKER_HIT_RADIUS - 0.5;
        let zone = hit_test(&WASTE_ZONES, egui::pos2(300.0 + offset, 280.0))
            .expect("click inside the halo should hit");
        assert_eq!(zone.id, 1);
    }

    #[test]
    fn test_miss_outside_halo() {
        assert!(
            hit_test(&WASTE_ZONES, egui::pos2(100.0, 450.0)).is_none(),
            "empty map area should not select anything"
        );
    }

    #[test]
    fn test_overlapping_halos_prefer_nearest() {
        let zones = [
            WasteZone { id: 10, name: "Near", fill_rate: 50, x: 100.0, y: 100.0 },
            WasteZone { id: 11, name: "Far", fill_rate: 50, x: 120.0, y: 100.0 },
        ];
        let zone = hit_test(&zones, egui::pos2(105.0, 100.0)).expect("inside both halos");
        assert_eq!(zone.id, 10);
    }

    // =========================================================================
    // Popup scenario
    // =========================================================================

    #[test]
    fn test_rajwada_popup_contents() {
        // Clicking Rajwada (fill 92) must surface "92%" and CRITICAL in red.
        let mut selection = SelectedZone::default();
        let rajwada = WASTE_ZONES
            .iter()
            .find(|zone| zone.name == "Rajwada")
            .expect("Rajwada in dataset");
        selection.select(rajwada.id);

        let shown = WASTE_ZONES
            .iter()
            .find(|zone| Some(zone.id) == selection.selected())
            .expect("selected zone resolves");
        assert_eq!(shown.name, "Rajwada");
        assert_eq!(format!("{}%", shown.fill_rate), "92%");
        assert_eq!(shown.tier().label(), "CRITICAL");
        assert_eq!(
            tier_color(shown.tier()),
            egui::Color32::from_rgb(220, 38, 38)
        );
    }

    #[test]
    fn test_dismiss_hides_popup() {
        let mut selection = SelectedZone::default();
        selection.select(4);
        selection.clear();
        let shown = WASTE_ZONES
            .iter()
            .find(|zone| Some(zone.id) == selection.selected());
        assert!(shown.is_none(), "cleared selection renders no popup");
    }
}
