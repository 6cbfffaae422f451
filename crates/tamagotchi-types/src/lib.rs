//! Shared type definitions for the Tamagotchi simulation.
//!
//! This crate is the single source of truth for the categorical values used
//! across the workspace: the pet core produces them and hosts (the session
//! runner, renderers) consume them.
//!
//! # Modules
//!
//! - [`enums`] -- Species, life stage, actions, activities, status,
//!   animation category, and random events

pub mod enums;

// Re-export all public types at crate root for convenience.
pub use enums::{
    ADULT_AGE, Activity, AnimationCategory, LifeStage, PetAction, RandomEvent, Species, Status,
    TEEN_AGE,
};
