//! Level data model, static level table, and the procedural generator.
//!
//! A [`Level`] is either built from a hand-authored sparse object list (the
//! embedded JSON table, [`StaticLevels`]) or generated as a dense tile grid
//! keyed by the level index. Both paths produce the same runtime shape:
//! a grid for tile rendering (empty for object levels), a precomputed list
//! of solid collider rectangles, and a list of entity spawns for the scene
//! builder. Generation is seeded with the level index, so re-entering a
//! level always reproduces the same layout.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::components::body::Rect;
use crate::components::kind::EntityKind;
use crate::components::patrol::Patrol;
use crate::fixed::Fx;
use crate::resources::config::TILE;

/// Tile codes for the dense grid.
pub const TILE_EMPTY: u8 = 0;
pub const TILE_GROUND: u8 = 1;
pub const TILE_BRICK: u8 = 2;
pub const TILE_BLOCK: u8 = 3;
pub const TILE_PIPE: u8 = 4;
pub const TILE_COIN: u8 = 5;
pub const TILE_FLAG: u8 = 6;

/// Generated levels are three viewport-widths wide.
pub const GRID_SCREENS: usize = 3;
/// Grid columns per viewport (600 px / 16 px tiles).
pub const SCREEN_COLS: usize = 37;
/// Grid rows (400 px / 16 px tiles).
pub const GRID_ROWS: usize = 25;
/// Total grid columns.
pub const GRID_COLS: usize = SCREEN_COLS * GRID_SCREENS;
/// Number of indices the generator accepts.
pub const LEVEL_COUNT: u32 = 32;

/// Hand-authored levels are one viewport wide.
const STATIC_WIDTH_PX: i32 = 600;
/// Rendered flag pole height in tiles for generated levels.
const FLAG_POLE_TILES: i32 = 7;

/// Identifier of a level as bound by overworld nodes: 1-based world and stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LevelId {
    pub world: u8,
    pub stage: u8,
}

impl LevelId {
    pub const fn new(world: u8, stage: u8) -> Self {
        Self { world, stage }
    }

    /// Flattened generator index. Eight stages are reserved per world so the
    /// mapping stays stable if worlds grow.
    pub const fn flat_index(&self) -> u32 {
        (self.world as u32 - 1) * 8 + (self.stage as u32 - 1)
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.world, self.stage)
    }
}

/// Errors from level construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LevelError {
    /// Generator asked for an index outside `[0, LEVEL_COUNT)`.
    BadIndex(u32),
    /// An overworld node references a level id with no table entry and no
    /// generator slot. Prevented by construction at map load.
    UnknownLevel(LevelId),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::BadIndex(index) => {
                write!(f, "level index {} out of range (max {})", index, LEVEL_COUNT)
            }
            LevelError::UnknownLevel(id) => write!(f, "no level bound to id {}", id),
        }
    }
}

impl std::error::Error for LevelError {}

/// One entity to spawn when the level is entered.
#[derive(Debug, Clone, Copy)]
pub struct Spawn {
    pub kind: EntityKind,
    pub rect: Rect,
    /// Per-frame patrol drift; zero for anything that does not walk.
    pub drift: Fx,
}

impl Spawn {
    fn fixed(kind: EntityKind, rect: Rect) -> Self {
        Self {
            kind,
            rect,
            drift: 0,
        }
    }
}

/// Hand-authored level definition as it appears in the embedded JSON table.
#[derive(Debug, Clone, Deserialize)]
pub struct StaticLevelDef {
    pub world: u8,
    pub stage: u8,
    pub platforms: Vec<[i32; 4]>,
    pub enemies: Vec<(i32, i32, String)>,
    pub coins: Vec<[i32; 2]>,
    pub powerups: Vec<[i32; 2]>,
    pub pipes: Vec<[i32; 2]>,
    pub switches: Vec<[i32; 2]>,
    pub flag: [i32; 2],
}

#[derive(Debug, Deserialize)]
struct StaticLevelFile {
    levels: Vec<StaticLevelDef>,
}

/// Table of hand-authored levels keyed by [`LevelId`].
#[derive(Resource, Debug, Clone, Default)]
pub struct StaticLevels {
    map: FxHashMap<LevelId, StaticLevelDef>,
}

impl StaticLevels {
    /// Parse the embedded JSON table.
    pub fn from_json(json: &str) -> Result<Self, String> {
        let file: StaticLevelFile =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse level table: {}", e))?;
        let mut map = FxHashMap::default();
        for def in file.levels {
            map.insert(LevelId::new(def.world, def.stage), def);
        }
        Ok(Self { map })
    }

    pub fn get(&self, id: LevelId) -> Option<&StaticLevelDef> {
        self.map.get(&id)
    }

    pub fn contains(&self, id: LevelId) -> bool {
        self.map.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Runtime level: render grid, solid geometry, and pending entity spawns.
#[derive(Resource, Debug, Clone)]
pub struct Level {
    pub id: LevelId,
    /// Dense tile grid for rendering; empty for object-list levels. Coin and
    /// flag cells are cleared here because those become entities.
    pub grid: Vec<Vec<u8>>,
    /// Solid rectangles the physics step resolves against.
    pub colliders: Vec<Rect>,
    /// Entities to spawn on entry.
    pub spawns: Vec<Spawn>,
    /// Full level width in pixels; a multiple of the viewport width.
    pub width_px: i32,
}

impl Level {
    /// Build the level bound to `id`: the static table wins, otherwise the
    /// grid generator runs on the flattened index.
    pub fn build(id: LevelId, statics: &StaticLevels) -> Result<Self, LevelError> {
        match statics.get(id) {
            Some(def) => Ok(Self::from_static(id, def)),
            None => Ok(Self::from_grid(id, generate_grid(id.flat_index())?)),
        }
    }

    /// Assemble a level from a sparse object list.
    pub fn from_static(id: LevelId, def: &StaticLevelDef) -> Self {
        let mut colliders = Vec::new();
        let mut spawns = Vec::new();

        for &[x, y, w, h] in &def.platforms {
            let rect = Rect::new(x, y, w, h);
            colliders.push(rect);
            spawns.push(Spawn::fixed(EntityKind::Platform, rect));
        }
        for &[x, y] in &def.pipes {
            let rect = Rect::new(x, y, 2 * TILE, 4 * TILE);
            colliders.push(rect);
            spawns.push(Spawn::fixed(EntityKind::Pipe, rect));
        }
        for (x, y, kind) in &def.enemies {
            let drift = if kind.as_str() == "koopa" {
                Patrol::koopa().dx
            } else {
                Patrol::goomba().dx
            };
            spawns.push(Spawn {
                kind: EntityKind::Enemy,
                rect: Rect::new(*x, *y, 24, 24),
                drift,
            });
        }
        for &[x, y] in &def.coins {
            spawns.push(Spawn::fixed(EntityKind::Coin, Rect::new(x, y, TILE, TILE)));
        }
        for &[x, y] in &def.powerups {
            spawns.push(Spawn::fixed(EntityKind::PowerUp, Rect::new(x, y, 20, 20)));
        }
        for &[x, y] in &def.switches {
            spawns.push(Spawn::fixed(
                EntityKind::Switch,
                Rect::new(x, y, 2 * TILE, TILE),
            ));
        }
        let [fx, fy] = def.flag;
        spawns.push(Spawn::fixed(EntityKind::Flag, Rect::new(fx, fy, 16, 32)));

        Self {
            id,
            grid: Vec::new(),
            colliders,
            spawns,
            width_px: STATIC_WIDTH_PX,
        }
    }

    /// Assemble a level from a generated tile grid. Coin and flag tiles are
    /// lifted out into spawns; solid tiles become one collider each.
    pub fn from_grid(id: LevelId, mut grid: Vec<Vec<u8>>) -> Self {
        let mut colliders = Vec::new();
        let mut spawns = Vec::new();

        for (y, row) in grid.iter_mut().enumerate() {
            for (x, tile) in row.iter_mut().enumerate() {
                let px = x as i32 * TILE;
                let py = y as i32 * TILE;
                match *tile {
                    TILE_GROUND | TILE_BRICK | TILE_BLOCK | TILE_PIPE => {
                        colliders.push(Rect::new(px, py, TILE, TILE));
                    }
                    TILE_COIN => {
                        spawns.push(Spawn::fixed(EntityKind::Coin, Rect::new(px, py, TILE, TILE)));
                        *tile = TILE_EMPTY;
                    }
                    TILE_FLAG => {
                        spawns.push(Spawn::fixed(
                            EntityKind::Flag,
                            Rect::new(px, py, TILE, FLAG_POLE_TILES * TILE),
                        ));
                        *tile = TILE_EMPTY;
                    }
                    _ => {}
                }
            }
        }

        Self {
            id,
            grid,
            colliders,
            spawns,
            width_px: GRID_COLS as i32 * TILE,
        }
    }
}

/// Generate the tile grid for a level index. Deterministic: the RNG is
/// seeded with the index, so the same index always yields the same grid.
///
/// Layout, in write order (later writes overwrite earlier ones, and no
/// traversability check is made):
/// - ground filling the bottom two rows across the full width
/// - 1..=4 two-tile-tall pipes at random columns, clear of both ends
/// - 18 brick-or-block tiles above the ground band
/// - 18 coins in the upper half
/// - one flag near the rightmost column
pub fn generate_grid(index: u32) -> Result<Vec<Vec<u8>>, LevelError> {
    if index >= LEVEL_COUNT {
        return Err(LevelError::BadIndex(index));
    }
    let mut rng = fastrand::Rng::with_seed(index as u64);
    let mut grid = vec![vec![TILE_EMPTY; GRID_COLS]; GRID_ROWS];

    for row in grid.iter_mut().skip(GRID_ROWS - 2) {
        row.fill(TILE_GROUND);
    }

    for _ in 0..rng.u32(1..=4) {
        let px = rng.usize(6..=GRID_COLS - 7);
        grid[GRID_ROWS - 4][px] = TILE_PIPE;
        grid[GRID_ROWS - 3][px] = TILE_PIPE;
    }

    for _ in 0..18 {
        let bx = rng.usize(4..=GRID_COLS - 6);
        let by = rng.usize(4..=GRID_ROWS - 7);
        grid[by][bx] = if rng.bool() { TILE_BRICK } else { TILE_BLOCK };
    }

    for _ in 0..18 {
        let cx = rng.usize(4..=GRID_COLS - 6);
        let cy = rng.usize(2..=GRID_ROWS - 10);
        grid[cy][cx] = TILE_COIN;
    }

    grid[3][GRID_COLS - 3] = TILE_FLAG;
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_is_deterministic() {
        let a = generate_grid(5).unwrap();
        let b = generate_grid(5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_distinct_indices_differ() {
        assert_ne!(generate_grid(0).unwrap(), generate_grid(1).unwrap());
    }

    #[test]
    fn test_generate_rejects_out_of_range_index() {
        assert!(generate_grid(LEVEL_COUNT - 1).is_ok());
        assert_eq!(
            generate_grid(LEVEL_COUNT),
            Err(LevelError::BadIndex(LEVEL_COUNT))
        );
    }

    #[test]
    fn test_ground_band_spans_full_width() {
        let grid = generate_grid(3).unwrap();
        for row in &grid[GRID_ROWS - 2..] {
            assert!(row.iter().all(|&t| t == TILE_GROUND));
        }
    }

    #[test]
    fn test_exactly_one_flag_per_grid() {
        for index in 0..LEVEL_COUNT {
            let grid = generate_grid(index).unwrap();
            let flags = grid
                .iter()
                .flatten()
                .filter(|&&t| t == TILE_FLAG)
                .count();
            assert_eq!(flags, 1, "level index {}", index);
        }
    }

    #[test]
    fn test_from_grid_lifts_coins_and_flag_into_spawns() {
        let level = Level::from_grid(LevelId::new(3, 1), generate_grid(16).unwrap());
        assert!(level.grid.iter().flatten().all(|&t| t <= TILE_PIPE));
        let flags = level
            .spawns
            .iter()
            .filter(|s| s.kind == EntityKind::Flag)
            .count();
        assert_eq!(flags, 1);
        assert!(level.spawns.iter().any(|s| s.kind == EntityKind::Coin));
        assert_eq!(level.width_px, GRID_COLS as i32 * TILE);
        // Width is a whole number of viewport screens.
        assert_eq!(level.width_px % (SCREEN_COLS as i32 * TILE), 0);
    }

    #[test]
    fn test_from_static_builds_colliders_and_spawns() {
        let def = StaticLevelDef {
            world: 1,
            stage: 1,
            platforms: vec![[0, 360, 600, 12], [120, 220, 80, 12]],
            enemies: vec![(260, 328, "goomba".into()), (400, 140, "koopa".into())],
            coins: vec![[160, 160]],
            powerups: vec![[192, 156]],
            pipes: vec![[300, 328]],
            switches: vec![[220, 348]],
            flag: [580, 328],
        };
        let level = Level::from_static(LevelId::new(1, 1), &def);
        // Platforms and pipes are solid; everything else is not.
        assert_eq!(level.colliders.len(), 3);
        assert!(level.grid.is_empty());
        let goomba = level
            .spawns
            .iter()
            .find(|s| s.kind == EntityKind::Enemy && s.drift < 0);
        let koopa = level
            .spawns
            .iter()
            .find(|s| s.kind == EntityKind::Enemy && s.drift > 0);
        assert!(goomba.is_some());
        assert!(koopa.is_some());
        assert_eq!(
            level
                .spawns
                .iter()
                .filter(|s| s.kind == EntityKind::Flag)
                .count(),
            1
        );
    }

    #[test]
    fn test_build_prefers_static_table() {
        let json = r#"{"levels": [{"world": 1, "stage": 1,
            "platforms": [[0, 360, 600, 12]], "enemies": [], "coins": [],
            "powerups": [], "pipes": [], "switches": [], "flag": [580, 328]}]}"#;
        let statics = StaticLevels::from_json(json).unwrap();
        let level = Level::build(LevelId::new(1, 1), &statics).unwrap();
        assert!(level.grid.is_empty());
        let generated = Level::build(LevelId::new(3, 1), &statics).unwrap();
        assert!(!generated.grid.is_empty());
    }

    #[test]
    fn test_flat_index_layout() {
        assert_eq!(LevelId::new(1, 1).flat_index(), 0);
        assert_eq!(LevelId::new(1, 5).flat_index(), 4);
        assert_eq!(LevelId::new(3, 1).flat_index(), 16);
        assert_eq!(LevelId::new(4, 8).flat_index(), 31);
    }
}
