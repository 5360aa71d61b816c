//! Learner preferences and the generated display name.

use crate::random::RandomSource;

const ADJECTIVES: [&str; 16] = [
    "Happy", "Clever", "Bright", "Swift", "Kind", "Brave", "Wise", "Cool", "Smart", "Quick",
    "Bold", "Calm", "Eager", "Fair", "Gentle", "Jolly",
];

const NOUNS: [&str; 12] = [
    "Learner", "Explorer", "Student", "Scholar", "Adventurer", "Seeker", "Discoverer",
    "Traveler", "Pioneer", "Navigator", "Wanderer", "Voyager",
];

/// Scalar settings, each persisted under its own key by [`crate::Profile`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Preferences {
    pub dark_mode: bool,
    pub username: String,
    pub sound_enabled: bool,
    pub notifications_enabled: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: false,
            username: String::new(),
            sound_enabled: true,
            notifications_enabled: true,
        }
    }
}

/// `<Adjective><Noun><1..=999>`, e.g. "SwiftVoyager417".
pub fn generate_username<R: RandomSource>(rng: &mut R) -> String {
    let adjective = ADJECTIVES[rng.index(ADJECTIVES.len())];
    let noun = NOUNS[rng.index(NOUNS.len())];
    let number = rng.index(999) + 1;
    format!("{adjective}{noun}{number}")
}
