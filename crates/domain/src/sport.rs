use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString};

use crate::Name;

/// A sport whose primary exercises are favored when ranking exercises.
pub trait SportDescriptor {
    fn name(&self) -> &str;
    fn primary_exercises(&self) -> impl Iterator<Item = &str>;
}

#[derive(Clone, Copy, Debug, EnumIter, EnumString, Eq, Hash, PartialEq)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Sport {
    Powerlifting,
    Weightlifting,
    #[strum(serialize = "crossfit")]
    CrossFit,
    Hyrox,
    Bodybuilding,
    Strongman,
    Calisthenics,
    GeneralFitness,
}

impl Sport {
    fn exercises(self) -> &'static [&'static str] {
        match self {
            Sport::Powerlifting => &["squat", "bench press", "deadlift"],
            Sport::Weightlifting => &["snatch", "clean", "jerk", "front squat", "overhead squat"],
            Sport::CrossFit => &[
                "thruster",
                "clean",
                "snatch",
                "deadlift",
                "front squat",
                "overhead squat",
                "pull-up",
                "muscle-up",
                "wall ball",
                "burpee",
            ],
            Sport::Hyrox => &[
                "ski erg",
                "sled push",
                "sled pull",
                "burpee broad jump",
                "row",
                "farmers carry",
                "sandbag lunge",
                "wall ball",
            ],
            Sport::Bodybuilding => &[
                "bench press",
                "squat",
                "row",
                "lat pulldown",
                "overhead press",
                "romanian deadlift",
            ],
            Sport::Strongman => &[
                "log press",
                "yoke",
                "atlas stone",
                "farmers carry",
                "deadlift",
                "axle",
            ],
            Sport::Calisthenics => &[
                "pull-up",
                "push-up",
                "dip",
                "muscle-up",
                "handstand push-up",
                "pistol squat",
            ],
            Sport::GeneralFitness => &["squat", "push-up", "row", "deadlift", "lunge", "plank"],
        }
    }
}

impl SportDescriptor for Sport {
    fn name(&self) -> &str {
        match self {
            Sport::Powerlifting => "Powerlifting",
            Sport::Weightlifting => "Weightlifting",
            Sport::CrossFit => "CrossFit",
            Sport::Hyrox => "HYROX",
            Sport::Bodybuilding => "Bodybuilding",
            Sport::Strongman => "Strongman",
            Sport::Calisthenics => "Calisthenics",
            Sport::GeneralFitness => "General Fitness",
        }
    }

    fn primary_exercises(&self) -> impl Iterator<Item = &str> {
        self.exercises().iter().copied()
    }
}

/// A sport defined outside of the built-in table, e.g. by a user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSport {
    pub name: Name,
    #[serde(default)]
    pub primary_exercises: Vec<String>,
}

impl SportDescriptor for CustomSport {
    fn name(&self) -> &str {
        self.name.as_ref()
    }

    fn primary_exercises(&self) -> impl Iterator<Item = &str> {
        self.primary_exercises.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, str::FromStr};

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_sport_name() {
        let mut names = HashSet::new();

        for sport in Sport::iter() {
            let name = sport.name().to_string();

            assert!(!name.is_empty());
            assert!(!names.contains(&name));

            names.insert(name);
        }
    }

    #[test]
    fn test_sport_primary_exercises() {
        for sport in Sport::iter() {
            let exercises = sport.primary_exercises().collect::<Vec<_>>();
            let unique = exercises.iter().collect::<HashSet<_>>();

            assert!(!exercises.is_empty(), "no exercises for {sport:?}");
            assert_eq!(
                exercises.len(),
                unique.len(),
                "duplicate exercise for {sport:?}"
            );

            for exercise in exercises {
                assert_eq!(exercise, exercise.trim().to_lowercase());
            }
        }
    }

    #[rstest]
    #[case("powerlifting", Ok(Sport::Powerlifting))]
    #[case("CrossFit", Ok(Sport::CrossFit))]
    #[case("general_fitness", Ok(Sport::GeneralFitness))]
    #[case("HYROX", Ok(Sport::Hyrox))]
    #[case("curling", Err(strum::ParseError::VariantNotFound))]
    fn test_sport_from_str(
        #[case] value: &str,
        #[case] expected: Result<Sport, strum::ParseError>,
    ) {
        assert_eq!(Sport::from_str(value), expected);
    }

    #[test]
    fn test_custom_sport() {
        let sport = CustomSport {
            name: Name::new("Arm Wrestling").unwrap(),
            primary_exercises: vec!["Wrist Curl".to_string(), "Pronation".to_string()],
        };

        assert_eq!(sport.name(), "Arm Wrestling");
        assert_eq!(
            sport.primary_exercises().collect::<Vec<_>>(),
            vec!["Wrist Curl", "Pronation"]
        );
    }
}
