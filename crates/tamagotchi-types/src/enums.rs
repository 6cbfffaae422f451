//! Enumeration types for the Tamagotchi simulation.
//!
//! Every categorical value the pet core produces or consumes lives here:
//! the pet variant, its life stage, the actions a caretaker can perform,
//! the activity left behind by the last action, the derived status and
//! animation category, and the kinds of random event a tick can inject.

use core::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Species
// ---------------------------------------------------------------------------

/// A pet variant.
///
/// The species only selects which externally supplied animation table is
/// used for rendering. It has no effect on the simulation rules.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Species {
    /// A cute feline friend.
    #[default]
    Cat,
    /// A fluffy bunny companion.
    Bunny,
    /// A mechanical buddy.
    Robot,
}

impl Species {
    /// Every known species, in menu order.
    pub const ALL: [Self; 3] = [Self::Cat, Self::Bunny, Self::Robot];

    /// Resolve a free-form tag to a species.
    ///
    /// Matching ignores case and surrounding whitespace. Unrecognized tags
    /// fall back to [`Species::Cat`] silently.
    pub fn from_tag(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|species| species.tag().eq_ignore_ascii_case(tag))
            .unwrap_or_default()
    }

    /// The lowercase tag used in configuration files and animation tables.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Cat => "cat",
            Self::Bunny => "bunny",
            Self::Robot => "robot",
        }
    }

    /// Capitalized name for display.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Cat => "Cat",
            Self::Bunny => "Bunny",
            Self::Robot => "Robot",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Life stage
// ---------------------------------------------------------------------------

/// Age (in days) at which a pet becomes a [`LifeStage::Teen`].
pub const TEEN_AGE: u32 = 15;

/// Age (in days) at which a pet becomes an [`LifeStage::Adult`].
pub const ADULT_AGE: u32 = 30;

/// Life phase derived purely from age.
///
/// Ordering follows the lifetime, so `Baby < Teen < Adult`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum LifeStage {
    /// Younger than [`TEEN_AGE`].
    #[default]
    Baby,
    /// From [`TEEN_AGE`] up to but excluding [`ADULT_AGE`].
    Teen,
    /// [`ADULT_AGE`] and older.
    Adult,
}

impl LifeStage {
    /// The stage for a pet of the given age.
    pub const fn for_age(age: u32) -> Self {
        if age >= ADULT_AGE {
            Self::Adult
        } else if age >= TEEN_AGE {
            Self::Teen
        } else {
            Self::Baby
        }
    }

    /// Stage name as shown to the player.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Baby => "Baby",
            Self::Teen => "Teen",
            Self::Adult => "Adult",
        }
    }
}

impl fmt::Display for LifeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Actions and activities
// ---------------------------------------------------------------------------

/// A caretaker action applied immediately to the pet's vitals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetAction {
    /// Give the pet food.
    Feed,
    /// Play with the pet.
    Play,
    /// Give the pet medicine.
    Heal,
    /// Put the pet to bed.
    Sleep,
}

impl PetAction {
    /// Every action, in menu order.
    pub const ALL: [Self; 4] = [Self::Feed, Self::Play, Self::Heal, Self::Sleep];

    /// The activity the pet is engaged in after this action.
    pub const fn activity(self) -> Activity {
        match self {
            Self::Feed => Activity::Eating,
            Self::Play => Activity::Playing,
            Self::Heal => Activity::Healing,
            Self::Sleep => Activity::Sleeping,
        }
    }

    /// Lowercase command name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::Play => "play",
            Self::Heal => "heal",
            Self::Sleep => "sleep",
        }
    }
}

impl fmt::Display for PetAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What the pet is doing as a result of its last action.
///
/// Only used to pick an animation category and a flavor message. A pet
/// that has never been cared for has no activity (`Option::None`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    /// After [`PetAction::Feed`].
    Eating,
    /// After [`PetAction::Play`].
    Playing,
    /// After [`PetAction::Heal`].
    Healing,
    /// After [`PetAction::Sleep`].
    Sleeping,
}

impl Activity {
    /// Lowercase activity name.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Eating => "eating",
            Self::Playing => "playing",
            Self::Healing => "healing",
            Self::Sleeping => "sleeping",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

// ---------------------------------------------------------------------------
// Derived display state
// ---------------------------------------------------------------------------

/// Status label derived from the vitals, first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Health below 30.
    Sick,
    /// Hunger above 70.
    Hungry,
    /// Happiness below 30.
    Sad,
    /// Energy below 30.
    Tired,
    /// Happiness above 80.
    Joyful,
    /// None of the above.
    Normal,
}

impl Status {
    /// Label as shown to the player.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sick => "Sick",
            Self::Hungry => "Hungry",
            Self::Sad => "Sad",
            Self::Tired => "Tired",
            Self::Joyful => "Joyful",
            Self::Normal => "Normal",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lookup key into a per-species table of animation frame sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationCategory {
    /// Default loop. Every species table must provide it.
    Idle,
    /// Happiness above 80.
    Happy,
    /// Health below 30.
    Sick,
    /// Last action was sleep.
    Sleeping,
    /// Last action was feed.
    Eating,
    /// Last action was play.
    Playing,
    /// Last action was heal.
    Healing,
}

impl AnimationCategory {
    /// The string key used in animation tables.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Happy => "happy",
            Self::Sick => "sick",
            Self::Sleeping => "sleeping",
            Self::Eating => "eating",
            Self::Playing => "playing",
            Self::Healing => "healing",
        }
    }
}

impl From<Activity> for AnimationCategory {
    fn from(activity: Activity) -> Self {
        match activity {
            Activity::Eating => Self::Eating,
            Activity::Playing => Self::Playing,
            Activity::Healing => Self::Healing,
            Activity::Sleeping => Self::Sleeping,
        }
    }
}

impl fmt::Display for AnimationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

// ---------------------------------------------------------------------------
// Random events
// ---------------------------------------------------------------------------

/// A random misfortune a tick may inject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RandomEvent {
    /// The pet suddenly gets hungrier.
    HungerSpike,
    /// The pet's mood drops.
    MoodDrop,
    /// The pet catches something.
    HealthDrop,
    /// The pet is suddenly worn out.
    EnergyDrain,
}

impl RandomEvent {
    /// Every event kind. Events are drawn uniformly from this list.
    pub const ALL: [Self; 4] = [
        Self::HungerSpike,
        Self::MoodDrop,
        Self::HealthDrop,
        Self::EnergyDrain,
    ];

    /// Name of the vital the event affects.
    pub const fn vital(self) -> &'static str {
        match self {
            Self::HungerSpike => "hunger",
            Self::MoodDrop => "happiness",
            Self::HealthDrop => "health",
            Self::EnergyDrain => "energy",
        }
    }
}

impl fmt::Display for RandomEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HungerSpike => write!(f, "hunger_spike"),
            Self::MoodDrop => write!(f, "mood_drop"),
            Self::HealthDrop => write!(f, "health_drop"),
            Self::EnergyDrain => write!(f, "energy_drain"),
        }
    }
}
