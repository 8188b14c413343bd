//! Display formatting helpers for tonnage and percentage figures.

/// Formats a tonnage for display with the unit suffix ("650T", "1,000T").
pub fn fmt_tons(tons: f32) -> String {
    let whole = tons.round() as i64;
    if whole >= 1_000_000 {
        format!("{:.1}MT", tons / 1_000_000.0)
    } else if whole >= 1_000 {
        format!("{},{:03}T", whole / 1_000, whole % 1_000)
    } else {
        format!("{whole}T")
    }
}

/// Formats a whole percentage ("92%").
pub fn fmt_pct(pct: u8) -> String {
    format!("{pct}%")
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fmt_tons_small() {
        assert_eq!(fmt_tons(50.0), "50T");
        assert_eq!(fmt_tons(650.0), "650T");
    }

    #[test]
    fn test_fmt_tons_thousands_grouped() {
        assert_eq!(fmt_tons(1000.0), "1,000T");
        assert_eq!(fmt_tons(12_345.0), "12,345T");
    }

    #[test]
    fn test_fmt_tons_rounds() {
        assert_eq!(fmt_tons(999.6), "1,000T");
        assert_eq!(fmt_tons(49.4), "49T");
    }

    #[test]
    fn test_fmt_tons_millions() {
        assert_eq!(fmt_tons(1_500_000.0), "1.5MT");
    }

    #[test]
    fn test_fmt_pct() {
        assert_eq!(fmt_pct(0), "0%");
        assert_eq!(fmt_pct(92), "92%");
        assert_eq!(fmt_pct(100), "100%");
    }
}
