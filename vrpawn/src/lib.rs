#![deny(missing_docs)]

//! G'day! `vrpawn` is the player side of a small VR game: a pawn with a tracked head and two tracked
//! hands, instant teleport locomotion, and the ability to grab things in the world and put them down again.
//!
//! # How it fits together
//! Everything lives in a [`hecs::World`]. The [`Engine`] owns that world along with a [`contexts::PhysicsContext`]
//! (a thin wrapper around [`rapier3d`]) and a [`contexts::InputContext`] that is fed a fresh [`contexts::InputSample`]
//! every tick. Each call to [`Engine::update`] runs the [`systems`] in order:
//!
//! 1. copy the tracked head and controller poses onto the pawn
//! 1. fire any bound actions (teleport, grab / release)
//! 1. keep whatever the pawn is holding locked to its left hand
//! 1. step the physics simulation and record sensor overlaps
//!
//! If you'd rather drive things yourself, every system has an `_inner` counterpart that takes the pieces it
//! needs directly, and the two pawn actions are available as plain functions in [`systems::teleport`] and
//! [`systems::grabbing`].

pub use engine::{Engine, EngineBuilder, TickData};
pub use glam;
pub use hecs;
pub use rapier3d;
pub use vrpawn_error::VrPawnError;

/// Free functions to parent and un-parent entities
pub mod attachment;
/// Components are data that are used to update the simulation and interact with the external world
pub mod components;
/// Settings for the pawn, its input bindings and the props it interacts with
pub mod config;
/// Contexts are wrappers around some external state that the engine will interact with
pub mod contexts;
mod engine;
/// Helpers to add interactive props to the world
pub mod props;
/// Systems are functions called each frame to update either the external state or the current simulation
pub mod systems;
/// Kitchen sink utility functions
pub mod util;
mod vrpawn_error;

/// vrpawn result type
pub type VrPawnResult<T> = std::result::Result<T, VrPawnError>;

/// Tag given to free-floating physics objects that the pawn may pick up
pub const PICKABLE_TAG: &str = "pickable";

/// Tag given to parts of actors that respond to being interacted with, like drawers
pub const DRAWER_TAG: &str = "drawer";
