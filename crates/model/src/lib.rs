//! Static data model for the waste-operations dashboard.
//!
//! Everything here is fixed at build time except [`report_clock::ReportClock`],
//! which reads the wall clock once when the resource is created. The ui crate
//! renders these records and never mutates them.

use bevy::prelude::*;

pub mod flow;
pub mod kpi;
pub mod report_clock;
pub mod zones;

pub struct ModelPlugin;

impl Plugin for ModelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<report_clock::ReportClock>()
            .add_systems(Startup, log_dataset);
    }
}

/// Logs a one-line summary of the compiled-in dataset at startup.
fn log_dataset(clock: Res<report_clock::ReportClock>) {
    info!(
        "dataset: {} zones, {:.0}T collected/day, data updated {}",
        zones::WASTE_ZONES.len(),
        flow::DAILY_FLOW.collection_tons,
        clock.formatted()
    );
}
