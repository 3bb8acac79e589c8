//! Ripple sound playback through Bevy audio

use bevy::asset::LoadState;
use bevy::audio::{AudioPlayer, AudioSource, PlaybackSettings, Volume};
use bevy::prelude::*;

use crate::core::config::SimulationConfig;
use crate::visualization::effects::AudioCue;

/// Handle to the ripple sound, None when muted by config
#[derive(Resource, Default)]
pub struct RippleSound {
    pub handle: Option<Handle<AudioSource>>,
    pub volume: f32,
}

/// Startup system to load the configured ripple sound
pub fn load_ripple_sound(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    config: Res<SimulationConfig>,
) {
    let handle = config
        .ripple_sound
        .as_ref()
        .map(|path| asset_server.load::<AudioSource>(path.clone()));
    commands.insert_resource(RippleSound {
        handle,
        volume: config.ripple_volume,
    });
}

/// Audio cue that spawns a one-shot, self-despawning audio player
pub struct SpawnAudioCue<'a, 'w, 's> {
    pub commands: &'a mut Commands<'w, 's>,
    pub asset_server: &'a AssetServer,
    pub handle: Handle<AudioSource>,
    pub volume: f32,
}

impl AudioCue for SpawnAudioCue<'_, '_, '_> {
    fn play(&mut self) -> anyhow::Result<()> {
        if let Some(LoadState::Failed(err)) = self.asset_server.get_load_state(self.handle.id()) {
            anyhow::bail!("ripple sound failed to load: {}", err);
        }

        self.commands.spawn((
            AudioPlayer::new(self.handle.clone()),
            PlaybackSettings::DESPAWN.with_volume(Volume::Linear(self.volume)),
        ));
        Ok(())
    }
}
