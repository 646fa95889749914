//! Simulation systems.
//!
//! Each system is a stateless bevy system that queries the components it
//! needs and spawns or despawns through `Commands`. They run once per
//! frame in the fixed order set by [`crate::game::build_schedule`].
//!
//! Submodules overview
//! - [`controller`] – accumulate directional key impulses into controller axes
//! - [`playeraction`] – shooting and the velocity/movement mode toggle
//! - [`asteroidspawner`] – periodic asteroid creation at the screen edges
//! - [`velocity`] – inertial motion with exponential drag
//! - [`mobility`] – direct constant-speed motion
//! - [`collision`] – pairwise overlap resolution by collision tag
//! - [`lifespan`] – count down lifespans and remove expired entities
//! - [`tracking`] – face the pointer or a target entity
//! - [`rotation`] – constant angular drift
//! - [`time`] – update simulation time and delta

pub mod asteroidspawner;
pub mod collision;
pub mod controller;
pub mod lifespan;
pub mod mobility;
pub mod playeraction;
pub mod rotation;
pub mod time;
pub mod tracking;
pub mod velocity;
