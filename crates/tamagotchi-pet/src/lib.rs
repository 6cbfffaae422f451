//! Pet state machine for the Tamagotchi simulation.
//!
//! This crate is the logic layer for a single virtual pet: everything that
//! operates on pet state without touching rendering or I/O. A host owns one
//! [`PetState`], calls an action or [`PetState::advance`], then reads the
//! derived values to draw a frame.
//!
//! # Modules
//!
//! - [`actions`] -- Fixed vital effects of feed, play, heal, and sleep
//! - [`animation`] -- Animation provider interface and a validated table ([`AnimationTable`])
//! - [`death`] -- Death conditions ([`DeathCause`])
//! - [`error`] -- Error types ([`AnimationError`])
//! - [`events`] -- Injectable random source and random event rolls ([`EventSource`])
//! - [`flavor`] -- Speech-bubble lines
//! - [`pet`] -- The pet itself ([`PetState`], [`TickReport`], [`PetSnapshot`])
//! - [`status`] -- Status label and animation category derivation
//! - [`vitals`] -- Clamped vitals and per-tick decay ([`Vitals`])

pub mod actions;
pub mod animation;
pub mod death;
pub mod error;
pub mod events;
pub mod flavor;
pub mod pet;
pub mod status;
pub mod vitals;

// Re-export primary types at crate root for convenience.
pub use animation::{
    AnimationProvider, AnimationSets, AnimationTable, FrameCursor, frame_at, resolve_frames,
};
pub use death::{DeathCause, check_death};
pub use error::AnimationError;
pub use events::{EVENT_CHANCE, EventSource, NoEvents, RandomEvents, choose_one, roll_event};
pub use flavor::flavor_message;
pub use pet::{PetSnapshot, PetState, TICKS_PER_DAY, TickReport};
pub use vitals::{MAX_VITAL, VitalDelta, Vitals};
