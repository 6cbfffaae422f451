//! Speech-bubble lines.
//!
//! A pet that just did something says something about it. An idle pet
//! picks a line of chatter at random.

use std::borrow::Cow;

use tamagotchi_types::{Activity, LifeStage};

use crate::events::{EventSource, choose_one};
use crate::pet::PetState;

/// One line of idle chatter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Chatter {
    Line(&'static str),
    /// "I'm a <stage> now!"
    StageAnnouncement,
}

const IDLE_CHATTER: [Chatter; 8] = [
    Chatter::Line("I love you!"),
    Chatter::Line("Let's play!"),
    Chatter::Line("I'm bored..."),
    Chatter::Line("What shall we do today?"),
    Chatter::Line("Hi there!"),
    Chatter::StageAnnouncement,
    Chatter::Line("Feed me!"),
    Chatter::Line("Care for me!"),
];

/// The line a pet says about an activity.
pub const fn activity_line(activity: Activity) -> &'static str {
    match activity {
        Activity::Eating => "Yum yum, delicious!",
        Activity::Playing => "Wheee! This is fun!",
        Activity::Healing => "I feel better now!",
        Activity::Sleeping => "Zzz... Zzz...",
    }
}

fn stage_announcement(stage: LifeStage) -> String {
    format!("I'm a {} now!", stage.label().to_lowercase())
}

/// What the pet says right now.
///
/// Idle pets draw one choice from `source`; busy pets consume nothing.
pub fn flavor_message<S>(pet: &PetState, source: &mut S) -> Cow<'static, str>
where
    S: EventSource + ?Sized,
{
    if let Some(activity) = pet.last_activity() {
        return Cow::Borrowed(activity_line(activity));
    }
    match choose_one(source, &IDLE_CHATTER) {
        Some(Chatter::Line(line)) => Cow::Borrowed(line),
        Some(Chatter::StageAnnouncement) => Cow::Owned(stage_announcement(pet.stage())),
        None => Cow::Borrowed("Hi there!"),
    }
}
