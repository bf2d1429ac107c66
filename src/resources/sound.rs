//! Bridge between the ECS world and the background sound thread.
//!
//! Call [`setup_sound`] once during initialization to spawn the thread and
//! insert the [`SoundBridge`] and `Messages<SoundCue>` resources. Call
//! [`shutdown_sound`] during teardown to stop the thread.
//!
//! The stock thread is a sink that logs each cue; a host with a real mixer
//! replaces it by draining the command channel itself.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Sender, unbounded};

use crate::events::sound::{SoundCmd, SoundCue};
use crate::systems::sound::sound_thread;

/// Command channel into the sound thread.
#[derive(Resource)]
pub struct SoundBridge {
    pub tx_cmd: Sender<SoundCmd>,
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the sound thread and register the bridge plus the cue message
/// buffer.
pub fn setup_sound(world: &mut World) {
    let (tx_cmd, rx_cmd) = unbounded::<SoundCmd>();

    let handle = std::thread::spawn(move || sound_thread(rx_cmd));

    world.insert_resource(SoundBridge { tx_cmd, handle });
    world.insert_resource(Messages::<SoundCue>::default());
}

/// Request shutdown of the sound thread and join it.
pub fn shutdown_sound(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<SoundBridge>() {
        let _ = bridge.tx_cmd.send(SoundCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
