//! Dashboard footer.

use bevy_egui::egui;

use model::report_clock::ReportClock;

/// Renders the centered footer caption with the report date.
pub fn render_footer(ui: &mut egui::Ui, clock: &ReportClock) {
    ui.vertical_centered(|ui| {
        ui.small(format!(
            "Indore Smart City Waste Management System | Data updated: {}",
            clock.formatted()
        ));
    });
}
