//! Constant horizontal drift for enemies.

use bevy_ecs::prelude::Component;

use crate::fixed::{FX_ONE, Fx};

/// Fixed per-frame horizontal displacement. Goombas walk left, koopas right;
/// there is no collision response for patrolling enemies.
#[derive(Component, Debug, Clone, Copy)]
pub struct Patrol {
    pub dx: Fx,
}

impl Patrol {
    pub const fn goomba() -> Self {
        Self { dx: -FX_ONE }
    }

    pub const fn koopa() -> Self {
        Self { dx: FX_ONE }
    }
}
