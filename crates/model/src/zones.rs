//! Waste-collection zones and fill-rate classification.
//!
//! The zone dataset is fixed at build time: eight collection zones across
//! the Indore district, each with a fill rate (percent of collection
//! capacity in use) and a position on the schematic map canvas.

use serde::Serialize;

/// Fill rate at or above which a zone is critical.
pub const CRITICAL_FILL_PCT: u8 = 85;
/// Fill rate at or above which a zone is high (below the critical cutoff).
pub const HIGH_FILL_PCT: u8 = 70;

/// A waste-collection zone on the district map.
///
/// Immutable after load. `x`/`y` are logical map-canvas coordinates in the
/// ui crate's 600x500 map space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WasteZone {
    pub id: u32,
    pub name: &'static str,
    /// Percent of the zone's collection capacity currently in use (0-100).
    pub fill_rate: u8,
    pub x: f32,
    pub y: f32,
}

impl WasteZone {
    /// Tier classification of this zone's fill rate.
    pub fn tier(&self) -> FillTier {
        FillTier::from_fill_rate(self.fill_rate)
    }
}

/// Three-tier fill classification, evaluated high to low.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FillTier {
    Normal,
    High,
    Critical,
}

impl FillTier {
    /// Classifies a fill rate. Values above 100 are clamped to 100 first.
    pub fn from_fill_rate(fill_rate: u8) -> Self {
        let pct = fill_rate.min(100);
        if pct >= CRITICAL_FILL_PCT {
            Self::Critical
        } else if pct >= HIGH_FILL_PCT {
            Self::High
        } else {
            Self::Normal
        }
    }

    /// Status label shown beside the marker color.
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::High => "HIGH",
            Self::Normal => "NORMAL",
        }
    }
}

/// The eight collection zones of the district.
pub const WASTE_ZONES: [WasteZone; 8] = [
    WasteZone { id: 1, name: "Rajwada", fill_rate: 92, x: 300.0, y: 280.0 },
    WasteZone { id: 2, name: "Vijay Nagar", fill_rate: 78, x: 380.0, y: 200.0 },
    WasteZone { id: 3, name: "Palasia", fill_rate: 85, x: 320.0, y: 260.0 },
    WasteZone { id: 4, name: "Rau", fill_rate: 65, x: 240.0, y: 380.0 },
    WasteZone { id: 5, name: "Sanwer Road", fill_rate: 88, x: 280.0, y: 320.0 },
    WasteZone { id: 6, name: "MR 10", fill_rate: 72, x: 400.0, y: 190.0 },
    WasteZone { id: 7, name: "Bhanwarkuan", fill_rate: 81, x: 310.0, y: 300.0 },
    WasteZone { id: 8, name: "Aerodrome", fill_rate: 68, x: 220.0, y: 270.0 },
];

/// Looks up a zone by id in the shipped dataset.
pub fn zone_by_id(id: u32) -> Option<&'static WasteZone> {
    WASTE_ZONES.iter().find(|zone| zone.id == id)
}

// =============================================================================
// Tests
// =============================================================================
