//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, input state, timing,
//! level data, and the host-facing queues. Each submodule documents the
//! semantics and intended usage of its resource(s).
//!
//! Overview
//! - `camera` – horizontal scroll offset and the clamped follow rule
//! - `config` – engine configuration file and the fixed-point tuning values
//! - `input` – per-frame action state with press/release edges
//! - `level` – level model, static level table, and the grid generator
//! - `mode` – authoritative and pending simulation mode
//! - `overworld` – map graph and the navigation cursor
//! - `renderqueue` – per-frame draw list handed to the host
//! - `scoreboard` – lives, coins, and the level countdown clock
//! - `sound` – bridge and channel for the background sound thread
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `worldtime` – simulation time and delta
pub mod camera;
pub mod config;
pub mod input;
pub mod level;
pub mod mode;
pub mod overworld;
pub mod renderqueue;
pub mod scoreboard;
pub mod sound;
pub mod systemsstore;
pub mod worldtime;
