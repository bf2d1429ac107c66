//! High-level game setup and scene management.
//!
//! [`setup`] parses the embedded map data and inserts the long-lived
//! resources. [`enter_level`] and [`exit_level`] are the scene hooks the
//! mode observer runs through the
//! [`crate::resources::systemsstore::SystemsStore`]; they rebuild and tear
//! down the level scene around the persistent resources.
//! [`build_schedule`] wires the per-frame systems in dependency order.

use bevy_ecs::prelude::*;
use log::{error, info};

use crate::components::body::Body;
use crate::components::kind::EntityKind;
use crate::components::patrol::Patrol;
use crate::components::persistent::Persistent;
use crate::components::player::Player;
use crate::resources::camera::Camera;
use crate::resources::config::{EngineConfig, PLAYER_SIZE, SPAWN, Tuning};
use crate::resources::input::{InputSnapshot, InputState};
use crate::resources::level::{Level, StaticLevels};
use crate::resources::mode::{GameMode, Modes, NextMode};
use crate::resources::overworld::Overworld;
use crate::resources::renderqueue::RenderQueue;
use crate::resources::scoreboard::{LevelClock, Scoreboard};
use crate::resources::worldtime::WorldTime;
use crate::systems::camera::follow_player;
use crate::systems::enemy::enemy_patrol;
use crate::systems::input::update_input_state;
use crate::systems::interactions::{check_flag, check_player_death, collect_items};
use crate::systems::mode::{check_pending_mode, mode_is_level, mode_is_overworld};
use crate::systems::overworld::overworld_nav;
use crate::systems::physics::player_physics;
use crate::systems::player::player_control;
use crate::systems::render::build_render_queue;
use crate::systems::sound::{forward_sound_cues, update_sound_cues};

/// Overworld map graph, embedded at build time.
pub const OVERWORLD_JSON: &str = include_str!("../assets/maps/overworld.json");
/// Hand-authored level table, embedded at build time.
pub const LEVELS_JSON: &str = include_str!("../assets/maps/levels.json");

/// Parse the embedded map data and insert every long-lived resource.
/// Fails if the embedded JSON is malformed or internally inconsistent.
pub fn setup(world: &mut World, config: EngineConfig) -> Result<(), String> {
    let statics = StaticLevels::from_json(LEVELS_JSON)?;
    let overworld = Overworld::from_json(OVERWORLD_JSON, &statics)?;
    info!(
        "Loaded {} static levels and {} overworld worlds",
        statics.len(),
        overworld.worlds().len()
    );

    world.insert_resource(Tuning::from_config(&config));
    world.insert_resource(Scoreboard::new(config.start_lives));
    world.insert_resource(config);
    world.insert_resource(statics);
    world.insert_resource(overworld);
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputSnapshot::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GameMode::default());
    world.insert_resource(NextMode::default());
    world.insert_resource(Camera::default());
    world.insert_resource(RenderQueue::default());
    Ok(())
}

/// Scene hook: build the level named by the current mode, spawn its
/// entities plus a fresh player, and reset the per-level counters.
///
/// Lives and the overworld cursor are deliberately left alone; everything
/// else about the previous scene is discarded first.
pub fn enter_level(world: &mut World) {
    let id = match world.resource::<GameMode>().current {
        Modes::InLevel(id) => id,
        Modes::Overworld => return,
    };

    let level = match Level::build(id, world.resource::<StaticLevels>()) {
        Ok(level) => level,
        Err(e) => {
            error!("Cannot enter level {}: {}", id, e);
            world.resource_mut::<NextMode>().request(Modes::Overworld);
            return;
        }
    };

    despawn_scene(world);

    world.spawn((
        Player,
        EntityKind::Player,
        Body::new(SPAWN.0, SPAWN.1, PLAYER_SIZE.0, PLAYER_SIZE.1),
    ));
    for spawn in &level.spawns {
        let body = Body::from_rect(spawn.rect);
        if spawn.drift != 0 {
            world.spawn((spawn.kind, body, Patrol { dx: spawn.drift }));
        } else {
            world.spawn((spawn.kind, body));
        }
    }
    info!(
        "Level {} ready: {} colliders, {} spawns",
        id,
        level.colliders.len(),
        level.spawns.len()
    );

    let level_time = world.resource::<EngineConfig>().level_time as i32;
    world.insert_resource(LevelClock::new(level_time));
    world.resource_mut::<Scoreboard>().coins = 0;
    world.insert_resource(Camera::default());
    world.insert_resource(level);
}

/// Scene hook: discard the level scene wholesale on the way back to the
/// overworld.
pub fn exit_level(world: &mut World) {
    despawn_scene(world);
    world.remove_resource::<Level>();
    world.remove_resource::<LevelClock>();
    world.insert_resource(Camera::default());
}

/// Despawn every scene entity. Observers and registered systems carry
/// [`Persistent`] and survive.
fn despawn_scene(world: &mut World) {
    let entities: Vec<Entity> = world
        .query_filtered::<Entity, (With<Body>, Without<Persistent>)>()
        .iter(world)
        .collect();
    for entity in entities {
        world.despawn(entity);
    }
}

/// Build the per-frame schedule. Input edges first, then the pending mode
/// flush so scene hooks run before any gameplay system reads the mode,
/// then control, physics, interactions, camera, and the host-facing
/// queues.
pub fn build_schedule() -> Schedule {
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(check_pending_mode.after(update_input_state));
    update.add_systems(
        overworld_nav
            .run_if(mode_is_overworld)
            .after(check_pending_mode),
    );
    update.add_systems(player_control.run_if(mode_is_level).after(check_pending_mode));
    update.add_systems(player_physics.run_if(mode_is_level).after(player_control));
    update.add_systems(enemy_patrol.run_if(mode_is_level).after(check_pending_mode));
    update.add_systems(collect_items.run_if(mode_is_level).after(player_physics));
    update.add_systems(check_flag.run_if(mode_is_level).after(player_physics));
    update.add_systems(
        check_player_death
            .run_if(mode_is_level)
            .after(player_physics),
    );
    update.add_systems(follow_player.run_if(mode_is_level).after(player_physics));
    update.add_systems(
        build_render_queue
            .after(follow_player)
            .after(overworld_nav)
            .after(collect_items),
    );
    // Sound systems must be together: advance the message buffer, then
    // forward this frame's cues to the sound thread.
    update.add_systems(
        (update_sound_cues, forward_sound_cues)
            .chain()
            .after(player_control)
            .after(collect_items)
            .after(check_flag)
            .after(check_player_death),
    );
    update
}
