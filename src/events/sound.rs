use bevy_ecs::message::Message;

/// Sound effect requests raised by gameplay systems. Buffered as messages
/// so any number of systems can emit cues in one frame.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Jump,
    Coin,
    PowerUp,
    LifeLost,
    GameOver,
    LevelClear,
}

/// Commands sent *to* the sound thread.
#[derive(Debug)]
pub enum SoundCmd {
    Play(SoundCue),
    Shutdown,
}
