//! Sound cue forwarding and the background sink thread.

use bevy_ecs::prelude::*;
use crossbeam_channel::Receiver;
use log::{debug, info};

use crate::events::sound::{SoundCmd, SoundCue};
use crate::resources::sound::SoundBridge;

/// Advance the [`SoundCue`] double buffer. Runs right before
/// [`forward_sound_cues`] so cues survive exactly one frame.
pub fn update_sound_cues(mut cues: ResMut<Messages<SoundCue>>) {
    cues.update();
}

/// Drain this frame's [`SoundCue`] messages into the command channel. The
/// bridge is optional so headless test worlds run without a sound thread.
pub fn forward_sound_cues(
    bridge: Option<Res<SoundBridge>>,
    mut cues: MessageReader<SoundCue>,
) {
    let Some(bridge) = bridge else {
        cues.clear();
        return;
    };
    for cue in cues.read() {
        let _ = bridge.tx_cmd.send(SoundCmd::Play(*cue));
    }
}

/// Background thread body. The stock implementation only logs; a host with
/// a mixer replaces this by consuming the channel itself. Exits on
/// [`SoundCmd::Shutdown`] or when the sending side disconnects.
pub fn sound_thread(rx_cmd: Receiver<SoundCmd>) {
    info!("Sound thread started");
    while let Ok(cmd) = rx_cmd.recv() {
        match cmd {
            SoundCmd::Play(cue) => debug!("Sound cue: {:?}", cue),
            SoundCmd::Shutdown => break,
        }
    }
    info!("Sound thread stopped");
}
