//! Draw list construction.
//!
//! Rebuilds the [`RenderQueue`] every frame in back-to-front order. The
//! level path culls tile columns and actors against the camera window;
//! the overworld path emits path links, stage nodes, and the cursor.

use bevy_ecs::prelude::*;

use crate::components::body::Body;
use crate::components::kind::EntityKind;
use crate::fixed::to_px;
use crate::resources::camera::Camera;
use crate::resources::config::{EngineConfig, TILE};
use crate::resources::level::{Level, TILE_EMPTY};
use crate::resources::mode::{GameMode, Modes};
use crate::resources::overworld::Overworld;
use crate::resources::renderqueue::{DrawKey, RenderQueue};
use crate::resources::scoreboard::{LevelClock, Scoreboard};

/// Overworld node radius in pixels.
const NODE_R: i32 = 16;

pub fn build_render_queue(
    mode: Res<GameMode>,
    config: Res<EngineConfig>,
    camera: Res<Camera>,
    level: Option<Res<Level>>,
    overworld: Res<Overworld>,
    board: Res<Scoreboard>,
    clock: Option<Res<LevelClock>>,
    mut queue: ResMut<RenderQueue>,
    actors: Query<(&Body, &EntityKind)>,
) {
    queue.clear();
    match mode.current {
        Modes::InLevel(_) => {
            if let Some(level) = level {
                queue_level(&mut queue, &config, &camera, &level, &actors);
            }
            queue.push(
                DrawKey::Hud {
                    lives: board.lives,
                    coins: board.coins,
                    time: clock.map_or(0, |c| c.remaining),
                },
                10,
                10,
                0,
                0,
            );
        }
        Modes::Overworld => queue_overworld(&mut queue, &overworld),
    }
}

fn queue_level(
    queue: &mut RenderQueue,
    config: &EngineConfig,
    camera: &Camera,
    level: &Level,
    actors: &Query<(&Body, &EntityKind)>,
) {
    // Visible tile column window, inclusive of the partially shown edges.
    if !level.grid.is_empty() {
        let first_col = (camera.offset_x / TILE).max(0) as usize;
        let last_col = ((camera.offset_x + config.view_width) / TILE + 1) as usize;
        for (y, row) in level.grid.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate().take(last_col).skip(first_col) {
                if tile == TILE_EMPTY {
                    continue;
                }
                queue.push(
                    DrawKey::Tile(tile),
                    x as i32 * TILE - camera.offset_x,
                    y as i32 * TILE,
                    TILE,
                    TILE,
                );
            }
        }
    }

    for (body, kind) in actors.iter() {
        let x = to_px(body.x) - camera.offset_x;
        if x + body.w < 0 || x > config.view_width {
            continue;
        }
        queue.push(DrawKey::Actor(*kind), x, to_px(body.y), body.w, body.h);
    }
}

fn queue_overworld(queue: &mut RenderQueue, overworld: &Overworld) {
    let world = overworld.current_world();
    let (_, node_idx) = overworld.cursor();

    // Links first so nodes draw over them. A link is the bounding box of
    // its two endpoints; the host draws the segment inside it.
    for link in &world.links {
        let a = &world.nodes[link[0]];
        let b = &world.nodes[link[1]];
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        queue.push(DrawKey::Link, x, y, (a.x - b.x).abs(), (a.y - b.y).abs());
    }

    for (i, node) in world.nodes.iter().enumerate() {
        queue.push(
            DrawKey::Node {
                selected: i == node_idx,
            },
            node.x - NODE_R,
            node.y - NODE_R,
            2 * NODE_R,
            2 * NODE_R,
        );
    }
}
