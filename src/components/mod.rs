//! ECS components for entities.
//!
//! Submodules overview:
//! - [`body`] – axis-aligned rectangle with fixed-point position/velocity and grounded flag
//! - [`kind`] – closed entity-kind tag replacing a class hierarchy
//! - [`patrol`] – constant horizontal drift for enemies
//! - [`persistent`] – marker for entities that survive level teardown
//! - [`player`] – marker for the player-controlled entity

pub mod body;
pub mod kind;
pub mod patrol;
pub mod persistent;
pub mod player;
