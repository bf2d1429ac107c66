//! Entity kind tag.
//!
//! Instead of a class hierarchy, every spawned entity carries one [`Body`]
//! plus an [`EntityKind`] tag; systems dispatch on the tag. The set is
//! closed: pickups, hazards, and decor are all variants here.
//!
//! [`Body`]: super::body::Body

use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

/// Semantic role of a spawned entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Platform,
    Enemy,
    Pipe,
    Coin,
    PowerUp,
    Switch,
    Flag,
}
