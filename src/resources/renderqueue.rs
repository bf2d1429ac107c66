//! Frame draw list handed to the embedding host.
//!
//! The simulation never draws. Each frame it rebuilds this queue with
//! camera-relative rectangles plus a [`DrawKey`] saying what each one is,
//! and the host consumes the queue with whatever renderer it has.

use bevy_ecs::prelude::Resource;

use crate::components::kind::EntityKind;

/// What a queued rectangle depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawKey {
    /// A level tile, carrying its tile code.
    Tile(u8),
    /// A spawned entity.
    Actor(EntityKind),
    /// An overworld stage node; `selected` marks the cursor.
    Node { selected: bool },
    /// A path segment between two overworld nodes.
    Link,
    /// The status line; the host renders the counters as text.
    Hud { lives: i32, coins: u32, time: i32 },
}

/// One rectangle to draw, in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderCommand {
    pub key: DrawKey,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

/// The per-frame draw list. Cleared and refilled every frame in draw order,
/// back to front.
#[derive(Resource, Debug, Default)]
pub struct RenderQueue {
    pub commands: Vec<RenderCommand>,
}

impl RenderQueue {
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn push(&mut self, key: DrawKey, x: i32, y: i32, w: i32, h: i32) {
        self.commands.push(RenderCommand { key, x, y, w, h });
    }
}
