use bevy::prelude::*;
use bevy::render::view::screenshot::{save_to_disk, Screenshot};
use bevy::window::PresentMode;
use bevy::winit::{UpdateMode, WinitSettings};

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Indore Waste Operations".to_string(),
            resolution: (1280.0, 900.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    .insert_resource(WinitSettings {
        focused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(16)),
        unfocused_mode: UpdateMode::reactive_low_power(std::time::Duration::from_millis(100)),
    })
    .insert_resource(ClearColor(Color::srgb(0.945, 0.961, 0.976)))
    .add_plugins((model::ModelPlugin, ui::UiPlugin))
    .add_systems(Startup, spawn_camera);

    // Screenshot mode: settles, saves one frame to the given path, and exits
    if let Ok(path) = std::env::var("WASTEOPS_SCREENSHOT") {
        app.insert_resource(ScreenshotState {
            path,
            frame: 0,
            taken: false,
        });
        app.add_systems(Update, drive_screenshot);
    }

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

#[derive(Resource)]
struct ScreenshotState {
    path: String,
    frame: u32,
    taken: bool,
}

/// Frames to wait before capturing, so fonts and layout settle.
const SETTLE_FRAMES: u32 = 30;
/// Frames to wait after capturing for the async save to finish.
const SAVE_FRAMES: u32 = 60;

fn drive_screenshot(
    mut commands: Commands,
    mut state: ResMut<ScreenshotState>,
    mut exit: EventWriter<AppExit>,
) {
    state.frame += 1;

    if !state.taken && state.frame >= SETTLE_FRAMES {
        commands
            .spawn(Screenshot::primary_window())
            .observe(save_to_disk(state.path.clone()));
        state.taken = true;
    }

    if state.taken && state.frame >= SETTLE_FRAMES + SAVE_FRAMES {
        exit.send(AppExit::Success);
    }
}
