//! Tilehop demo shell.
//!
//! Runs the simulation core headless with a scripted input feed: confirm
//! into the selected level, walk right, hop periodically. The draw list is
//! rebuilt every frame and sound cues go to the logging sink thread, so the
//! log shows the full overworld/level round trip.
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --frames 1800
//! cargo run --release -- --dump-level 7
//! ```

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use tilehop::components::persistent::Persistent;
use tilehop::events::mode::observe_mode_change_event;
use tilehop::game;
use tilehop::resources::config::EngineConfig;
use tilehop::resources::input::InputSnapshot;
use tilehop::resources::level::{
    TILE_BLOCK, TILE_BRICK, TILE_COIN, TILE_FLAG, TILE_GROUND, TILE_PIPE, generate_grid,
};
use tilehop::resources::mode::{GameMode, Modes};
use tilehop::resources::scoreboard::Scoreboard;
use tilehop::resources::sound::{setup_sound, shutdown_sound};
use tilehop::resources::systemsstore::SystemsStore;
use tilehop::systems::time::update_world_time;

/// Tilehop simulation core
#[derive(Parser)]
#[command(version, about = "Headless deterministic platformer core demo")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the generated tile grid for a level index and exit.
    #[arg(long, value_name = "INDEX")]
    dump_level: Option<u32>,

    /// Number of frames to run the scripted demo for.
    #[arg(long, default_value_t = 1800)]
    frames: u64,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Early-exit: dump a generated grid and quit (no world needed)
    if let Some(index) = cli.dump_level {
        match generate_grid(index) {
            Ok(grid) => {
                for row in &grid {
                    let line: String = row.iter().map(|&t| tile_char(t)).collect();
                    println!("{}", line);
                }
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    let mut config = match &cli.config {
        Some(path) => EngineConfig::with_path(path),
        None => EngineConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    let target_fps = config.target_fps.max(1);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();

    // Sound bridge must exist before any system can emit cues.
    setup_sound(&mut world);

    if let Err(e) = game::setup(&mut world, config) {
        log::error!("Setup failed: {}", e);
        shutdown_sound(&mut world);
        std::process::exit(1);
    }

    // Scene hooks, registered as persistent entities so they survive scene
    // teardown, and the observer that applies mode transitions.
    let mut systems_store = SystemsStore::new();

    let enter_level_id = world.register_system(game::enter_level);
    world.entity_mut(enter_level_id.entity()).insert(Persistent);
    systems_store.insert("enter_level", enter_level_id);

    let exit_level_id = world.register_system(game::exit_level);
    world.entity_mut(exit_level_id.entity()).insert(Persistent);
    systems_store.insert("exit_level", exit_level_id);

    world.insert_resource(systems_store);
    world.spawn((Observer::new(observe_mode_change_event), Persistent));
    world.flush();

    let mut update = game::build_schedule();
    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    let frame_time = Duration::from_secs_f32(1.0 / target_fps as f32);
    let dt = 1.0 / target_fps as f32;

    for frame in 0..cli.frames {
        let start = Instant::now();

        let mode = world.resource::<GameMode>().current;
        *world.resource_mut::<InputSnapshot>() = scripted_input(frame, mode);
        if world.resource::<InputSnapshot>().quit {
            break;
        }

        update_world_time(&mut world, dt);
        update.run(&mut world);
        world.clear_trackers();

        if let Some(left) = frame_time.checked_sub(start.elapsed()) {
            std::thread::sleep(left);
        }
    }

    let board = world.resource::<Scoreboard>();
    log::info!(
        "Demo finished: {} coins, {} lives, mode {:?}",
        board.coins,
        board.lives,
        world.resource::<GameMode>().current
    );
    shutdown_sound(&mut world);
}

/// Scripted demo input. On the map, tap confirm; in a level, run right and
/// hop on a fixed cadence.
fn scripted_input(frame: u64, mode: Modes) -> InputSnapshot {
    match mode {
        Modes::Overworld => InputSnapshot {
            confirm: frame % 2 == 0,
            ..Default::default()
        },
        Modes::InLevel(_) => InputSnapshot {
            move_right: true,
            jump: frame % 48 < 12,
            ..Default::default()
        },
    }
}

fn tile_char(tile: u8) -> char {
    match tile {
        TILE_GROUND => '#',
        TILE_BRICK => 'B',
        TILE_BLOCK => '?',
        TILE_PIPE => '|',
        TILE_COIN => 'o',
        TILE_FLAG => 'F',
        _ => '.',
    }
}
