//! Event types exchanged between the backend and the simulation.
//!
//! Submodules:
//! - [`input`] – key and quit events polled from the windowing backend
pub mod input;
