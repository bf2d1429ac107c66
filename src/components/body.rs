//! Axis-aligned body component with fixed-point position and velocity.
//!
//! [`Body`] is the single physical representation shared by every simulated
//! entity: the player, enemies, and the static rectangles spawned for
//! rendering and overlap tests. Position and velocity are fixed-point
//! ([`crate::fixed`]); width and height are whole pixels.

use bevy_ecs::prelude::Component;

use crate::fixed::{Fx, from_px, to_px};

/// Integer-pixel rectangle used for all collision tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Strict AABB overlap test. Rectangles that only touch edges do not
    /// count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

/// A moving or static axis-aligned rectangle in level space.
#[derive(Component, Debug, Clone, Copy)]
pub struct Body {
    /// Left edge, fixed-point.
    pub x: Fx,
    /// Top edge, fixed-point.
    pub y: Fx,
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
    /// Horizontal velocity, fixed-point per frame.
    pub vx: Fx,
    /// Vertical velocity, fixed-point per frame. Positive is down.
    pub vy: Fx,
    /// Whether the body currently rests on a supporting surface.
    pub on_ground: bool,
}

impl Body {
    /// Create a body at a whole-pixel position with zero velocity.
    pub const fn new(x_px: i32, y_px: i32, w: i32, h: i32) -> Self {
        Self {
            x: from_px(x_px),
            y: from_px(y_px),
            w,
            h,
            vx: 0,
            vy: 0,
            on_ground: false,
        }
    }

    /// Create a body covering a rectangle (static geometry).
    pub const fn from_rect(rect: Rect) -> Self {
        Self::new(rect.x, rect.y, rect.w, rect.h)
    }

    /// Bounding box in whole pixels, flooring the fixed-point position.
    pub const fn rect(&self) -> Rect {
        Rect::new(to_px(self.x), to_px(self.y), self.w, self.h)
    }

    /// Move to a whole-pixel position and zero the velocity.
    pub fn teleport(&mut self, x_px: i32, y_px: i32) {
        self.x = from_px(x_px);
        self.y = from_px(y_px);
        self.vx = 0;
        self.vy = 0;
        self.on_ground = false;
    }
}
