//! Deterministic 2D platformer simulation core.
//!
//! Fixed-point physics, tile and object level data, a seed-keyed level
//! generator, an overworld navigation graph, and the overworld/level mode
//! machine, all running headless on **bevy_ecs**. The crate never opens a
//! window; a host drives the frame loop, feeds an input snapshot, and
//! drains the draw list and sound channel each frame.
//!
//! # Module layout
//!
//! - [`components`] – ECS components (bodies, kind tags, patrol drift)
//! - [`events`] – mode transition event and sound cues
//! - [`fixed`] – the fixed-point number contract
//! - [`game`] – setup, scene hooks, and the frame schedule
//! - [`resources`] – ECS resources (config, levels, overworld, queues)
//! - [`systems`] – per-frame systems

pub mod components;
pub mod events;
pub mod fixed;
pub mod game;
pub mod resources;
pub mod systems;
