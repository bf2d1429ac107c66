use bevy_ecs::prelude::Component;

/// Marker for the single player-controlled entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;
