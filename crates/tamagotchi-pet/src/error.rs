//! Error types for the tamagotchi-pet crate.
//!
//! The state machine itself never fails. The only fallible operation is
//! building an animation table, whose shape is supplied from outside.

use tamagotchi_types::{AnimationCategory, Species};

/// Errors raised while building or validating an animation table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnimationError {
    /// A species table has no usable idle sequence.
    #[error("animation table for {species} has no idle sequence")]
    MissingIdle {
        /// The species missing an idle sequence.
        species: Species,
    },

    /// A category maps to an empty frame sequence.
    #[error("animation sequence {category} for {species} has no frames")]
    EmptySequence {
        /// The species owning the sequence.
        species: Species,
        /// The empty category.
        category: AnimationCategory,
    },
}
