//! Overworld navigation graph.
//!
//! The map is a list of worlds, each holding an ordered run of stage nodes
//! with screen positions and the level id each node opens. A cursor tracks
//! the selected world and node; movement is rate limited so one held key
//! steps node by node instead of skipping across the row.

use bevy_ecs::prelude::Resource;
use serde::Deserialize;

use crate::resources::level::{LevelId, StaticLevels, LEVEL_COUNT};

/// Seconds between accepted cursor moves while a direction is held.
pub const MOVE_COOLDOWN: f32 = 0.15;

/// One selectable stage node on the map.
#[derive(Debug, Clone, Deserialize)]
pub struct MapNode {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub world: u8,
    pub stage: u8,
}

impl MapNode {
    pub fn level(&self) -> LevelId {
        LevelId::new(self.world, self.stage)
    }
}

/// One world row: named, with its nodes in traversal order and the node
/// index pairs to draw path links between.
#[derive(Debug, Clone, Deserialize)]
pub struct WorldDef {
    pub name: String,
    pub nodes: Vec<MapNode>,
    #[serde(default)]
    pub links: Vec<[usize; 2]>,
}

#[derive(Debug, Clone, Deserialize)]
struct OverworldFile {
    worlds: Vec<WorldDef>,
}

/// The overworld map plus the navigation cursor. Survives level entry and
/// exit, so the selection is where the player left it.
#[derive(Resource, Debug, Clone)]
pub struct Overworld {
    worlds: Vec<WorldDef>,
    world_idx: usize,
    node_idx: usize,
    cooldown: f32,
}

impl Overworld {
    /// Parse the embedded JSON map and check every node against the level
    /// table and the generator range, so selection can never reference a
    /// level that does not exist.
    pub fn from_json(json: &str, statics: &StaticLevels) -> Result<Self, String> {
        let file: OverworldFile = serde_json::from_str(json)
            .map_err(|e| format!("Failed to parse overworld map: {}", e))?;
        if file.worlds.is_empty() {
            return Err("Overworld map has no worlds".to_string());
        }
        for world in &file.worlds {
            if world.nodes.is_empty() {
                return Err(format!("Overworld world '{}' has no nodes", world.name));
            }
            for node in &world.nodes {
                let id = node.level();
                if !statics.contains(id) && id.flat_index() >= LEVEL_COUNT {
                    return Err(format!(
                        "Overworld node '{}' references unknown level {}",
                        node.name, id
                    ));
                }
            }
            for link in &world.links {
                if link[0] >= world.nodes.len() || link[1] >= world.nodes.len() {
                    return Err(format!(
                        "Overworld world '{}' has a link to a missing node",
                        world.name
                    ));
                }
            }
        }
        Ok(Self {
            worlds: file.worlds,
            world_idx: 0,
            node_idx: 0,
            cooldown: 0.0,
        })
    }

    /// Cool the move timer down. Runs once per frame while on the map.
    pub fn tick(&mut self, dt: f32) {
        if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - dt).max(0.0);
        }
    }

    pub fn ready_to_move(&self) -> bool {
        self.cooldown <= 0.0
    }

    /// Step the cursor along the current world row, clamped at the ends.
    /// Every accepted move rearms the cooldown, clamped ones included, so
    /// reversing direction at a row end still waits a full step.
    pub fn move_node(&mut self, delta: i32) {
        if !self.ready_to_move() {
            return;
        }
        let last = self.current_world().nodes.len() as i32 - 1;
        self.node_idx = (self.node_idx as i32 + delta).clamp(0, last) as usize;
        self.cooldown = MOVE_COOLDOWN;
    }

    /// Step between world rows. Changing world resets the node cursor to
    /// the first stage of the new world.
    pub fn switch_world(&mut self, delta: i32) {
        if !self.ready_to_move() {
            return;
        }
        let last = self.worlds.len() as i32 - 1;
        let next = (self.world_idx as i32 + delta).clamp(0, last);
        if next as usize != self.world_idx {
            self.world_idx = next as usize;
            self.node_idx = 0;
            self.cooldown = MOVE_COOLDOWN;
        }
    }

    pub fn current_world(&self) -> &WorldDef {
        &self.worlds[self.world_idx]
    }

    pub fn current_node(&self) -> &MapNode {
        &self.current_world().nodes[self.node_idx]
    }

    /// Level id the selected node opens.
    pub fn current_level(&self) -> LevelId {
        self.current_node().level()
    }

    pub fn worlds(&self) -> &[WorldDef] {
        &self.worlds
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.world_idx, self.node_idx)
    }
}
