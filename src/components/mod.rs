//! ECS components for the simulation.
//!
//! Components are plain data with no behavior beyond small helpers. Each kind
//! is an independent bevy [`Component`](bevy_ecs::component::Component); there
//! is no base type shared between kinds.
//!
//! Submodules overview:
//! - [`sprite`] – screen rectangle, texture key and angle; also [`sprite::Rect`]
//! - [`movement`] – direction plus flat speed (direct motion)
//! - [`controller`] – accumulated directional input axis
//! - [`velocity`] – inertial velocity with exponential drag
//! - [`rotation`] – constant angular drift
//! - [`tracking`] – face the pointer or another entity
//! - [`lifespan`] – countdown to removal
//! - [`collisiontag`] – collision resolution class
//! - [`asteroidspawner`] – periodic asteroid spawn rule

pub mod asteroidspawner;
pub mod collisiontag;
pub mod controller;
pub mod lifespan;
pub mod movement;
pub mod rotation;
pub mod sprite;
pub mod tracking;
pub mod velocity;
