//! Satellite info panel shown while a satellite is selected

use bevy::prelude::*;
use bevy_feathers::palette;

use crate::satellite::{SatelliteRecord, SatelliteStore};
use crate::selection::SelectionState;

/// Multipliers from scene units to the units shown in the panel
pub const ALTITUDE_DISPLAY_FACTOR: f64 = 100.0;
pub const SPEED_DISPLAY_FACTOR: f64 = 100_000.0;

/// Root node of the info panel
#[derive(Component)]
pub struct InfoPanel;

/// Text node inside the info panel
#[derive(Component)]
pub struct InfoPanelText;

/// Satellite the panel currently describes
#[derive(Resource, Default, Debug)]
pub struct InfoPanelState {
    pub shown: Option<usize>,
}

/// Panel body for a record
pub fn format_info(record: &SatelliteRecord) -> String {
    format!(
        "Name: {}\nAltitude: {:.2} km\nSpeed: {:.2} m/s",
        record.name(),
        record.scaled_altitude * ALTITUDE_DISPLAY_FACTOR,
        record.angular_speed * SPEED_DISPLAY_FACTOR
    )
}

pub fn spawn_info_panel(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(20.0),
                bottom: Val::Px(20.0),
                padding: UiRect::all(Val::Px(10.0)),
                display: Display::None,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            ZIndex(10),
            InfoPanel,
            Name::new("Info Panel"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(palette::LIGHT_GRAY_1),
                InfoPanelText,
            ));
        });
}

/// Show, hide or refresh the panel when the selection changes
pub fn update_info_panel_system(
    selection: Res<SelectionState>,
    store: Res<SatelliteStore>,
    mut state: ResMut<InfoPanelState>,
    mut panel: Query<&mut Node, With<InfoPanel>>,
    mut text: Query<&mut Text, With<InfoPanelText>>,
) {
    let selected = selection.selected();
    if selected == state.shown {
        return;
    }
    state.shown = selected;

    let record = selected.and_then(|i| store.get(i));
    for mut node in &mut panel {
        node.display = if record.is_some() {
            Display::Flex
        } else {
            Display::None
        };
    }
    if let Some(record) = record {
        for mut t in &mut text {
            t.0 = format_info(record);
        }
    }
}
