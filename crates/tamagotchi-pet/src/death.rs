//! Death conditions.
//!
//! A pet dies when health reaches 0 or hunger reaches 100. Death is a
//! normal terminal state, not an error: hosts poll for it after every
//! action or tick and stop mutating the pet once it is observed.

use core::fmt;

use serde::Serialize;

use crate::vitals::{MAX_VITAL, Vitals};

/// Why a pet died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeathCause {
    /// Health reached 0.
    TooSick,
    /// Hunger reached 100.
    TooHungry,
}

impl DeathCause {
    /// The game-over line for a pet with the given name.
    pub fn epitaph(self, name: &str) -> String {
        format!("{name} got {self} and has passed away.")
    }
}

impl fmt::Display for DeathCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooSick => write!(f, "too sick"),
            Self::TooHungry => write!(f, "too hungry"),
        }
    }
}

/// Check whether the vitals meet a death condition.
///
/// Health is checked first, so a pet that is both at zero health and at
/// full hunger died of sickness.
pub const fn check_death(vitals: &Vitals) -> Option<DeathCause> {
    if vitals.health() == 0 {
        return Some(DeathCause::TooSick);
    }
    if vitals.hunger() >= MAX_VITAL {
        return Some(DeathCause::TooHungry);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn healthy_pet_is_alive() {
        assert_eq!(check_death(&Vitals::STARTING), None);
        assert_eq!(check_death(&Vitals::new(99, 0, 1, 0)), None);
    }

    #[test]
    fn zero_health_is_fatal() {
        assert_eq!(
            check_death(&Vitals::new(10, 50, 0, 50)),
            Some(DeathCause::TooSick)
        );
    }

    #[test]
    fn full_hunger_is_fatal() {
        assert_eq!(
            check_death(&Vitals::new(100, 50, 50, 50)),
            Some(DeathCause::TooHungry)
        );
    }

    #[test]
    fn sickness_takes_priority() {
        assert_eq!(
            check_death(&Vitals::new(100, 50, 0, 50)),
            Some(DeathCause::TooSick)
        );
    }

    #[test]
    fn epitaph_text() {
        assert_eq!(
            DeathCause::TooHungry.epitaph("Mochi"),
            "Mochi got too hungry and has passed away."
        );
        assert_eq!(DeathCause::TooSick.to_string(), "too sick");
    }
}
