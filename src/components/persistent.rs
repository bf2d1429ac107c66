//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component are not despawned when a level
//! is torn down. Used for observers and anything else that must survive the
//! overworld/level round trip.

use bevy_ecs::prelude::Component;

/// Tag component for entities that survive level teardown.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
