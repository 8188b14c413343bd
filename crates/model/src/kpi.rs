//! Headline impact KPIs.
//!
//! Three independent display figures. The diversion KPI is a configured
//! program-level figure and is not derived from the flow snapshot.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImpactKpis {
    pub diversion_pct: u8,
    pub logistics_savings_pct: u8,
    pub traceability_pct: u8,
}

/// The KPI figures shown at the top of the dashboard.
pub const IMPACT_KPIS: ImpactKpis = ImpactKpis {
    diversion_pct: 95,
    logistics_savings_pct: 40,
    traceability_pct: 100,
};

impl ImpactKpis {
    /// (value, title, caption) rows in display order.
    pub fn cards(&self) -> [(u8, &'static str, &'static str); 3] {
        [
            (
                self.diversion_pct,
                "Diversion Rate",
                "Via MRF Sorting & Co-Processing",
            ),
            (
                self.logistics_savings_pct,
                "Logistics Savings",
                "Via IoT Sensors & ACO Routing",
            ),
            (
                self.traceability_pct,
                "Traceability",
                "Via Industrial Mass Balance",
            ),
        ]
    }
}
