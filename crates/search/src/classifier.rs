//! Movement-family classification of exercise names.
//!
//! Classes are checked in strict precedence: compound, transition, specialty and
//! finally isolation as the fallback.

use strum::{Display, EnumIter};

use crate::{MAX_INPUT_LEN, truncate};

#[derive(Clone, Copy, Debug, Display, EnumIter, Eq, Hash, PartialEq)]
pub enum MovementClass {
    Compound,
    Transition,
    Specialty,
    Isolation,
}

/// Substrings that rule out a compound classification.
static EXCLUSIONS: [&str; 17] = [
    "jump",
    "tuck",
    "hop",
    "throw",
    "walk",
    "carry",
    "hold",
    "plank",
    "crunch",
    "raise",
    "curl",
    "extension",
    "fly",
    "kickback",
    "pushdown",
    "pullover",
    "rollout",
];

static COMPOUND_MOVEMENTS: [&str; 33] = [
    "squat",
    "back squat",
    "front squat",
    "bench press",
    "bench",
    "deadlift",
    "conventional deadlift",
    "sumo deadlift",
    "trap bar deadlift",
    "overhead press",
    "military press",
    "shoulder press",
    "push press",
    "press",
    "row",
    "barbell row",
    "bent over row",
    "pendlay row",
    "pull-up",
    "pullup",
    "chin-up",
    "chinup",
    "clean",
    "power clean",
    "clean and jerk",
    "jerk",
    "split jerk",
    "snatch",
    "power snatch",
    "thruster",
    "dip",
    "dips",
    "muscle-up",
];

/// Tokens that make a short name (three words or fewer) a compound lift.
static CORE_LIFTS: [&str; 12] = [
    "squat", "bench", "deadlift", "press", "row", "pullup", "pullups", "chinup", "dip", "dips",
    "clean", "snatch",
];

static TRANSITION_MOVEMENTS: [&str; 35] = [
    "pause squat",
    "box squat",
    "pin squat",
    "tempo squat",
    "goblet squat",
    "split squat",
    "hack squat",
    "close grip bench",
    "incline bench",
    "decline bench",
    "floor press",
    "spoto press",
    "romanian deadlift",
    "rdl",
    "stiff leg deadlift",
    "deficit deadlift",
    "block pull",
    "rack pull",
    "good morning",
    "hip thrust",
    "glute bridge",
    "lunge",
    "step up",
    "landmine press",
    "seal row",
    "chest supported row",
    "lat pulldown",
    "face pull",
    "hang clean",
    "hang snatch",
    "clean pull",
    "snatch pull",
    "push-up",
    "kettlebell swing",
    "box jump",
];

static SPECIALTY_MOVEMENTS: [&str; 20] = [
    "zercher",
    "jefferson",
    "safety bar",
    "ssb",
    "cambered bar",
    "anderson",
    "belt squat",
    "sots press",
    "snatch grip",
    "overhead squat",
    "reverse hyper",
    "nordic",
    "glute ham",
    "turkish get-up",
    "atlas stone",
    "yoke",
    "sled",
    "farmers",
    "log press",
    "tire flip",
];

/// Classify an exercise name into its movement family.
///
/// This is a pure function of the name: the same name always yields the same class.
#[must_use]
pub fn classify(name: &str) -> MovementClass {
    let name = truncate(name.trim(), MAX_INPUT_LEN).to_lowercase();
    let tokens = words(&name);

    if !is_excluded(&name) && is_compound(&name, &tokens) {
        MovementClass::Compound
    } else if is_transition(&name, &tokens) {
        MovementClass::Transition
    } else if is_specialty(&name) {
        MovementClass::Specialty
    } else {
        MovementClass::Isolation
    }
}

fn words(value: &str) -> Vec<&str> {
    value
        .split([' ', '-', '_', '(', ')'])
        .filter(|token| !token.is_empty())
        .collect()
}

fn contains_all_words(tokens: &[&str], phrase: &str) -> bool {
    words(phrase).iter().all(|word| tokens.contains(word))
}

fn is_excluded(name: &str) -> bool {
    EXCLUSIONS.iter().any(|pattern| name.contains(pattern))
}

fn is_compound(name: &str, tokens: &[&str]) -> bool {
    COMPOUND_MOVEMENTS.iter().any(|movement| {
        name == *movement
            || name
                .strip_prefix(movement)
                .is_some_and(|rest| rest.starts_with(' ') || rest.starts_with('('))
            || name
                .strip_suffix(movement)
                .is_some_and(|rest| rest.ends_with(' '))
            || (tokens.len() <= 4 && contains_all_words(tokens, movement))
    }) || (tokens.len() <= 3 && tokens.iter().any(|token| CORE_LIFTS.contains(token)))
}

fn is_transition(name: &str, tokens: &[&str]) -> bool {
    TRANSITION_MOVEMENTS
        .iter()
        .any(|movement| name.contains(movement) || contains_all_words(tokens, movement))
}

fn is_specialty(name: &str) -> bool {
    SPECIALTY_MOVEMENTS
        .iter()
        .any(|movement| name.contains(movement))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::exact("Squat", MovementClass::Compound)]
    #[case::suffix("Back Squat", MovementClass::Compound)]
    #[case::prefix("Deadlift from Blocks", MovementClass::Compound)]
    #[case::prefix_parenthesis("Bench Press(Competition Grip)", MovementClass::Compound)]
    #[case::hyphen("Weighted Pull-Up", MovementClass::Compound)]
    #[case::all_words("Press Bench Close", MovementClass::Compound)]
    #[case::core_lift_token("Hang Power Clean", MovementClass::Compound)]
    #[case::upper_case("ROMANIAN DEADLIFT", MovementClass::Compound)]
    #[case::excluded_jump("Squat Jump to Tuck Jump", MovementClass::Isolation)]
    #[case::excluded_extension("Leg Extension", MovementClass::Isolation)]
    #[case::excluded_curl("Barbell Curl", MovementClass::Isolation)]
    #[case::excluded_walk("Walking Lunge", MovementClass::Transition)]
    #[case::transition_substring("Barbell Good Morning", MovementClass::Transition)]
    #[case::transition_words("Pull Face Cable Rope Attachment", MovementClass::Transition)]
    #[case::excluded_transition("Box Jump", MovementClass::Transition)]
    #[case::specialty_excluded("Zercher Carry", MovementClass::Specialty)]
    #[case::specialty("Jefferson Curl", MovementClass::Specialty)]
    #[case::specialty_hyphen("Turkish Get-Up", MovementClass::Specialty)]
    #[case::isolation("Lateral Raise", MovementClass::Isolation)]
    #[case::isolation_unknown("Calf Machine", MovementClass::Isolation)]
    #[case::empty("", MovementClass::Isolation)]
    fn test_classify(#[case] name: &str, #[case] expected: MovementClass) {
        assert_eq!(classify(name), expected);
    }

    #[test]
    fn test_classify_long_word_count() {
        assert_eq!(
            classify("Single Arm Cable Machine Row Variation"),
            MovementClass::Isolation
        );
    }

    #[test]
    fn test_classify_deterministic() {
        for name in ["Back Squat", "Hip Thrust", "Zercher Carry", "Cable Fly"] {
            assert_eq!(classify(name), classify(name));
        }
    }

    #[rstest]
    #[case("bulgarian split-squat (dumbbell)", &["bulgarian", "split", "squat", "dumbbell"])]
    #[case("snatch_grip  deadlift", &["snatch", "grip", "deadlift"])]
    #[case("", &[])]
    fn test_words(#[case] value: &str, #[case] expected: &[&str]) {
        assert_eq!(words(value), expected);
    }

    #[test]
    fn test_pattern_tables() {
        for table in [
            &EXCLUSIONS[..],
            &COMPOUND_MOVEMENTS[..],
            &CORE_LIFTS[..],
            &TRANSITION_MOVEMENTS[..],
            &SPECIALTY_MOVEMENTS[..],
        ] {
            let unique = table.iter().collect::<HashSet<_>>();
            assert_eq!(table.len(), unique.len());

            for pattern in table {
                assert_eq!(*pattern, pattern.trim().to_lowercase());
            }
        }
    }
}
