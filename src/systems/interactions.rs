//! Player-versus-level interactions: pickups, the flag, and the death flow.

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::body::Body;
use crate::components::kind::EntityKind;
use crate::components::player::Player;
use crate::events::sound::SoundCue;
use crate::fixed::to_px;
use crate::resources::config::{EngineConfig, SPAWN};
use crate::resources::mode::{Modes, NextMode};
use crate::resources::scoreboard::{LevelClock, Scoreboard};

/// Collect coins and power-ups the player overlaps. Collected entities are
/// despawned; switches are solid-free scenery and stay put.
pub fn collect_items(
    mut commands: Commands,
    mut board: ResMut<Scoreboard>,
    mut cues: MessageWriter<SoundCue>,
    player: Query<&Body, With<Player>>,
    items: Query<(Entity, &Body, &EntityKind), Without<Player>>,
) {
    for player_body in player.iter() {
        let player_rect = player_body.rect();
        for (entity, body, kind) in items.iter() {
            if !player_rect.overlaps(&body.rect()) {
                continue;
            }
            match kind {
                EntityKind::Coin => {
                    board.coins += 1;
                    cues.write(SoundCue::Coin);
                    commands.entity(entity).despawn();
                    debug!("Coin collected, total {}", board.coins);
                }
                EntityKind::PowerUp => {
                    cues.write(SoundCue::PowerUp);
                    commands.entity(entity).despawn();
                }
                _ => {}
            }
        }
    }
}

/// Win check: touching the flag requests the switch back to the overworld.
pub fn check_flag(
    mut next_mode: ResMut<NextMode>,
    mut cues: MessageWriter<SoundCue>,
    player: Query<&Body, With<Player>>,
    flags: Query<(&Body, &EntityKind), Without<Player>>,
) {
    for player_body in player.iter() {
        let player_rect = player_body.rect();
        for (body, kind) in flags.iter() {
            if *kind == EntityKind::Flag && player_rect.overlaps(&body.rect()) {
                info!("Flag reached, returning to overworld");
                cues.write(SoundCue::LevelClear);
                next_mode.request(Modes::Overworld);
                return;
            }
        }
    }
}

/// Death flow: falling below the viewport or running the clock out costs
/// a life and puts the player back at the spawn point with zeroed
/// velocity. Hitting zero lives rolls the counter back to the starting
/// value; the scene stays in the level either way.
pub fn check_player_death(
    config: Res<EngineConfig>,
    mut clock: ResMut<LevelClock>,
    mut board: ResMut<Scoreboard>,
    mut cues: MessageWriter<SoundCue>,
    mut player: Query<&mut Body, With<Player>>,
) {
    let timer_expired = clock.tick_frame();
    for mut body in player.iter_mut() {
        let fell = to_px(body.y) > config.view_height;
        if !fell && !timer_expired {
            continue;
        }
        let game_over = board.lose_life();
        if game_over {
            info!("Out of lives, counter reset to {}", board.lives);
            cues.write(SoundCue::GameOver);
        } else {
            info!("Life lost, {} remaining", board.lives);
            cues.write(SoundCue::LifeLost);
        }
        body.teleport(SPAWN.0, SPAWN.1);
        if timer_expired {
            clock.reset();
        }
    }
}
