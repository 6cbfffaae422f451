//! Animation provider interface.
//!
//! The pet only ever produces an [`AnimationCategory`]. Turning that into
//! frames is the job of an [`AnimationProvider`] supplied by the host. A
//! category missing from a species' table falls back to that species'
//! idle sequence.
//!
//! [`AnimationTable`] is a ready-made provider that hosts can deserialize
//! from their own asset files. It is validated on construction: every
//! species it lists has a non-empty idle sequence and no sequence is empty.

use std::collections::BTreeMap;

use serde::Deserialize;
use tamagotchi_types::{AnimationCategory, Species};

use crate::error::AnimationError;
use crate::pet::PetState;

/// Raw frame sequences keyed by species, then category.
pub type AnimationSets = BTreeMap<Species, BTreeMap<AnimationCategory, Vec<String>>>;

/// Source of animation frames for each species and category.
pub trait AnimationProvider {
    /// The frame sequence for a category, if the species defines it.
    fn frames(&self, species: Species, category: AnimationCategory) -> Option<&[String]>;
}

/// The frames to play for a category, falling back to idle.
///
/// Returns `None` only when the species has neither the category nor an
/// idle sequence.
pub fn resolve_frames<P>(
    provider: &P,
    species: Species,
    category: AnimationCategory,
) -> Option<&[String]>
where
    P: AnimationProvider + ?Sized,
{
    provider
        .frames(species, category)
        .filter(|frames| !frames.is_empty())
        .or_else(|| provider.frames(species, AnimationCategory::Idle))
        .filter(|frames| !frames.is_empty())
}

/// The frame to show at `frame_index`, cycling through the sequence.
pub fn frame_at<P>(
    provider: &P,
    species: Species,
    category: AnimationCategory,
    frame_index: u64,
) -> Option<&str>
where
    P: AnimationProvider + ?Sized,
{
    let frames = resolve_frames(provider, species, category)?;
    let len = u64::try_from(frames.len()).ok()?;
    let position = usize::try_from(frame_index.checked_rem(len)?).ok()?;
    frames.get(position).map(String::as_str)
}

/// A validated, in-memory animation table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AnimationSets")]
pub struct AnimationTable {
    sets: AnimationSets,
}

impl AnimationTable {
    /// Build a table, validating every species in it.
    pub fn new(sets: AnimationSets) -> Result<Self, AnimationError> {
        for (species, categories) in &sets {
            validate_species(*species, categories)?;
        }
        Ok(Self { sets })
    }

    /// Add or replace one species' categories.
    pub fn insert_species(
        &mut self,
        species: Species,
        categories: BTreeMap<AnimationCategory, Vec<String>>,
    ) -> Result<(), AnimationError> {
        validate_species(species, &categories)?;
        self.sets.insert(species, categories);
        Ok(())
    }

    /// Species that have frames in this table.
    pub fn species(&self) -> impl Iterator<Item = Species> + '_ {
        self.sets.keys().copied()
    }

    /// Whether the table has no species at all.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl TryFrom<AnimationSets> for AnimationTable {
    type Error = AnimationError;

    fn try_from(sets: AnimationSets) -> Result<Self, Self::Error> {
        Self::new(sets)
    }
}

impl AnimationProvider for AnimationTable {
    fn frames(&self, species: Species, category: AnimationCategory) -> Option<&[String]> {
        self.sets
            .get(&species)
            .and_then(|categories| categories.get(&category))
            .map(Vec::as_slice)
    }
}

fn validate_species(
    species: Species,
    categories: &BTreeMap<AnimationCategory, Vec<String>>,
) -> Result<(), AnimationError> {
    if !categories.contains_key(&AnimationCategory::Idle) {
        return Err(AnimationError::MissingIdle { species });
    }
    if let Some((category, _)) = categories.iter().find(|(_, frames)| frames.is_empty()) {
        return Err(AnimationError::EmptySequence {
            species,
            category: *category,
        });
    }
    Ok(())
}

/// Presentation frame counter.
///
/// Independent of the pet's tick count: hosts advance it once per drawn
/// frame, however many frames they draw between ticks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameCursor {
    index: u64,
}

impl FrameCursor {
    /// A cursor at frame 0.
    pub const fn new() -> Self {
        Self { index: 0 }
    }

    /// The current frame index.
    pub const fn index(self) -> u64 {
        self.index
    }

    /// Move to the next frame and return its index.
    pub const fn step(&mut self) -> u64 {
        self.index = self.index.saturating_add(1);
        self.index
    }

    /// The frame to draw for the pet at the current index.
    pub fn current<'a, P>(self, provider: &'a P, pet: &PetState) -> Option<&'a str>
    where
        P: AnimationProvider + ?Sized,
    {
        frame_at(provider, pet.species(), pet.animation_category(), self.index)
    }
}
