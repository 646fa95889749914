//! Asteroid game library.
//!
//! A small 2D arcade simulation: a player craft flies, shoots and dodges
//! asteroids until it is destroyed. Entities are bevy_ecs entities carrying
//! the [`components`], and a fixed pipeline of bevy_ecs systems advances them
//! each frame.
//! The windowing/rendering backend is optional (feature `raylib`).

#[cfg(feature = "raylib")]
pub mod backend;
pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
