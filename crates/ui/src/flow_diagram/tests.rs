//! Tests for the flow diagram module.

#[cfg(test)]
mod tests {
    use model::flow::{
        WasteFlow, COMPOSTING_BAND_WIDTH, COMPOSTING_SHARE_PCT, DAILY_FLOW, LANDFILL_BAND_WIDTH,
        LANDFILL_SHARE_PCT, RECYCLING_BAND_WIDTH, RECYCLING_SHARE_PCT, TARGET_COMPARISON_CAPTION,
    };

    use crate::formatting::fmt_tons;

    #[test]
    fn test_dashboard_diversion_display() {
        // 650 + 300 over 1000 collected.
        assert_eq!(DAILY_FLOW.diversion_rate_display(), "95.0");
    }

    #[test]
    fn test_zero_flow_displays_zero_not_nan() {
        let empty = WasteFlow {
            collection_tons: 0.0,
            recycling_tons: 0.0,
            composting_tons: 0.0,
            landfill_tons: 0.0,
        };
        assert_eq!(empty.diversion_rate_display(), "0.0");
    }

    #[test]
    fn test_node_quantity_labels() {
        assert_eq!(fmt_tons(DAILY_FLOW.collection_tons), "1,000T");
        assert_eq!(fmt_tons(DAILY_FLOW.recycling_tons), "650T");
        assert_eq!(fmt_tons(DAILY_FLOW.composting_tons), "300T");
        assert_eq!(fmt_tons(DAILY_FLOW.landfill_tons), "50T");
    }

    #[test]
    fn test_band_widths_are_the_preset_constants() {
        // Widths are fixed per category, not derived from tonnage.
        assert_eq!(RECYCLING_BAND_WIDTH, 50.0);
        assert_eq!(COMPOSTING_BAND_WIDTH, 30.0);
        assert_eq!(LANDFILL_BAND_WIDTH, 5.0);
    }

    #[test]
    fn test_share_labels_are_the_preset_constants() {
        assert_eq!(RECYCLING_SHARE_PCT, 65);
        assert_eq!(COMPOSTING_SHARE_PCT, 30);
        assert_eq!(LANDFILL_SHARE_PCT, 5);
    }

    #[test]
    fn test_target_caption_is_static() {
        // The caption never tracks the computed value.
        assert_eq!(
            TARGET_COMPARISON_CAPTION,
            "Target: 95% | Current: Above target \u{2713}"
        );
    }
}
