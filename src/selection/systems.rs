//! Pointer handling systems feeding the selection state machine

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::config::SimulationConfig;
use crate::satellite::SatelliteStore;
use crate::selection::picking::{PickRay, pick};
use crate::selection::state::{SelectionChange, SelectionState};
use crate::ui::MainCamera;

/// Last known cursor position in viewport pixels and the camera ray through it
#[derive(Resource, Default, Debug)]
pub struct PointerState {
    pub cursor: Option<Vec2>,
    pub ray: Option<PickRay>,
}

/// Build a picking ray from a viewport position
fn cursor_ray(camera: &Camera, camera_transform: &GlobalTransform, cursor: Vec2) -> Option<PickRay> {
    match camera.viewport_to_world(camera_transform, cursor) {
        Ok(ray) => Some(PickRay::from(ray)),
        Err(err) => {
            debug!("Cursor ray unavailable: {:?}", err);
            None
        }
    }
}

fn pick_index(ray: Option<&PickRay>, store: &SatelliteStore, config: &SimulationConfig) -> Option<usize> {
    pick(ray?, store.records(), config.interaction_radius).map(|hit| hit.index)
}

/// Pointer-move: track the cursor and rebuild the ray when it moves
pub fn pointer_move_system(
    window: Single<&Window, With<PrimaryWindow>>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut pointer: ResMut<PointerState>,
) {
    let cursor = window.cursor_position();
    if cursor == pointer.cursor {
        return;
    }

    let ray = cursor.and_then(|cursor| {
        let (camera, camera_transform) = camera.single().ok()?;
        cursor_ray(camera, camera_transform, cursor)
    });
    pointer.cursor = cursor;
    pointer.ray = ray;
}

/// Re-pick the hovered satellite, only after the pointer moved
pub fn hover_system(
    pointer: Res<PointerState>,
    store: Res<SatelliteStore>,
    config: Res<SimulationConfig>,
    mut selection: ResMut<SelectionState>,
) {
    if !pointer.is_changed() {
        return;
    }

    let hit = pick_index(pointer.ray.as_ref(), &store, &config);
    if selection.hovered() != hit {
        selection.on_pointer_move(hit);
    }
}

/// Click: pick along the last known ray and update the selection
pub fn click_system(
    buttons: Res<ButtonInput<MouseButton>>,
    store: Res<SatelliteStore>,
    config: Res<SimulationConfig>,
    pointer: Res<PointerState>,
    mut selection: ResMut<SelectionState>,
) {
    if !buttons.just_released(MouseButton::Left) {
        return;
    }

    let hit = pick_index(pointer.ray.as_ref(), &store, &config);
    match selection.on_click(hit) {
        SelectionChange::Selected(index) => {
            if let Some(record) = store.get(index) {
                info!(
                    "Selected {} (index {}, altitude {:.1})",
                    record.name(),
                    index,
                    record.altitude
                );
            }
        }
        SelectionChange::Cleared => info!("Selection cleared"),
        SelectionChange::Unchanged => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coordinates::{DISPLAY_SCALE, EARTH_RADIUS_DISPLAY};
    use crate::satellite::SatelliteRecord;
    use bevy::math::{DVec3, Dir3, Ray3d};

    fn store_at(positions: &[DVec3]) -> SatelliteStore {
        let records = positions
            .iter()
            .map(|p| {
                let mut r =
                    SatelliteRecord::new(0.0, 0.0, 100.0, 0.0, 0.0, DISPLAY_SCALE, EARTH_RADIUS_DISPLAY);
                r.position = *p;
                r
            })
            .collect();
        SatelliteStore::from_records(records)
    }

    /// Ray from the camera position straight down -Z at (x, 0)
    fn ray_at_x(x: f32) -> Option<PickRay> {
        Some(PickRay::from(Ray3d::new(Vec3::new(x, 0.0, 1000.0), Dir3::NEG_Z)))
    }

    fn selection_app(pointer: PointerState) -> App {
        let mut app = App::new();
        app.insert_resource(SimulationConfig::default());
        app.insert_resource(store_at(&[
            DVec3::new(0.0, 0.0, 600.0),
            DVec3::new(100.0, 0.0, 600.0),
        ]));
        app.insert_resource(pointer);
        app.init_resource::<SelectionState>();
        app.init_resource::<ButtonInput<MouseButton>>();
        app.add_systems(Update, (hover_system, click_system).chain());
        app
    }

    fn release_left(app: &mut App) {
        let mut buttons = app.world_mut().resource_mut::<ButtonInput<MouseButton>>();
        buttons.clear();
        buttons.press(MouseButton::Left);
        buttons.release(MouseButton::Left);
    }

    #[test]
    fn test_click_acts_on_last_known_ray() {
        let mut app = selection_app(PointerState {
            cursor: Some(Vec2::new(10.0, 10.0)),
            ray: ray_at_x(100.0),
        });

        // No release yet: hover only.
        app.update();
        let selection = app.world().resource::<SelectionState>();
        assert_eq!(selection.hovered(), Some(1));
        assert_eq!(selection.selected(), None);

        release_left(&mut app);
        app.update();
        assert_eq!(app.world().resource::<SelectionState>().selected(), Some(1));

        // Click on empty space clears the selection.
        app.world_mut().resource_mut::<PointerState>().ray = ray_at_x(50.0);
        release_left(&mut app);
        app.update();
        assert_eq!(app.world().resource::<SelectionState>().selected(), None);
    }

    #[test]
    fn test_click_without_ray_clears_selection() {
        let mut app = selection_app(PointerState::default());
        app.world_mut().resource_mut::<SelectionState>().on_click(Some(0));

        release_left(&mut app);
        app.update();
        assert_eq!(app.world().resource::<SelectionState>().selected(), None);
    }

    #[test]
    fn test_hover_not_repicked_while_pointer_unchanged() {
        let mut app = selection_app(PointerState {
            cursor: Some(Vec2::ZERO),
            ray: ray_at_x(0.0),
        });
        app.update();
        assert_eq!(app.world().resource::<SelectionState>().hovered(), Some(0));

        // Satellite 1 moves under the cursor, but the pointer did not move.
        app.world_mut().resource_mut::<SatelliteStore>().records_mut()[0].position =
            DVec3::new(-300.0, 0.0, 600.0);
        app.world_mut().resource_mut::<SatelliteStore>().records_mut()[1].position =
            DVec3::new(0.0, 0.0, 600.0);
        app.update();
        assert_eq!(app.world().resource::<SelectionState>().hovered(), Some(0));

        // Next pointer move picks it up.
        app.world_mut().resource_mut::<PointerState>().cursor = Some(Vec2::ONE);
        app.update();
        assert_eq!(app.world().resource::<SelectionState>().hovered(), Some(1));
    }
}
