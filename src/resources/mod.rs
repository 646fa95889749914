//! ECS resources made available to systems.
//!
//! Overview
//! - `gameconfig` – window settings, tuning constants and asset paths
//! - `input` – events and pointer position for the current frame
//! - `player` – which entity the action keys control
//! - `screensize` – playfield dimensions in pixels
//! - `spawnrng` – seedable randomness for spawn placement
//! - `worldtime` – simulation time and delta
pub mod gameconfig;
pub mod input;
pub mod player;
pub mod screensize;
pub mod spawnrng;
pub mod worldtime;
