//! Dashboard UI: theme, KPI cards, zone map, flow diagram, footer.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

pub mod dashboard;
pub mod flow_diagram;
pub mod footer;
pub mod formatting;
pub mod kpi_cards;
pub mod theme;
pub mod zone_map;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .init_resource::<zone_map::SelectedZone>()
            .add_systems(Startup, theme::apply_light_theme)
            .add_systems(
                Update,
                (dashboard::dashboard_ui, zone_map::dismiss_keybind),
            );
    }
}
