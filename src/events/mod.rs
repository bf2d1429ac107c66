//! Events and buffered messages exchanged between systems.
//!
//! Overview
//! - `mode` – mode transition event and the observer that applies it
//! - `sound` – sound cues and the commands sent to the sound thread
pub mod mode;
pub mod sound;
