#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod name;
mod sport;

use std::collections::BTreeSet;

use derive_more::Deref;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub use error::{ReadError, StorageError};
pub use name::{MAX_NAME_LEN, Name, NameError};
pub use sport::{CustomSport, Sport, SportDescriptor};

#[allow(async_fn_in_trait)]
pub trait ExerciseRepository {
    async fn read_exercises(&self) -> Result<Vec<Exercise>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait WorkoutRepository {
    async fn read_workouts(&self) -> Result<Vec<Workout>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgramRepository {
    async fn read_programs(&self) -> Result<Vec<Program>, ReadError>;
}

macro_rules! entity_id {
    ($name: ident) => {
        #[derive(Deref, Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
        #[derive(Serialize, Deserialize)]
        pub struct $name(Uuid);

        impl $name {
            #[must_use]
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }

            #[must_use]
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<u128> for $name {
            fn from(value: u128) -> Self {
                Self(Uuid::from_bytes(value.to_be_bytes()))
            }
        }
    };
}

entity_id!(ExerciseID);
entity_id!(WorkoutID);
entity_id!(ProgramID);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: Name,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_muscle: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub secondary_muscles: BTreeSet<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub equipment: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sport_tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_video: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_technique_guide: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vbt_enabled: bool,
}

impl Exercise {
    #[must_use]
    pub fn new(id: ExerciseID, name: Name) -> Self {
        Self {
            id,
            name,
            primary_muscle: String::new(),
            secondary_muscles: BTreeSet::new(),
            equipment: vec![],
            sport_tags: vec![],
            has_video: false,
            has_technique_guide: false,
            vbt_enabled: false,
        }
    }

    /// Primary muscle followed by all secondary muscles, skipping blank entries.
    pub fn muscles(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.primary_muscle.as_str())
            .chain(self.secondary_muscles.iter().map(String::as_str))
            .filter(|m| !m.trim().is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    pub id: WorkoutID,
    pub name: Name,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exercises: Vec<WorkoutExercise>,
}

impl Workout {
    #[must_use]
    pub fn new(id: WorkoutID, name: Name) -> Self {
        Self {
            id,
            name,
            exercises: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutExercise {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub muscle_group: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
    pub id: ProgramID,
    pub name: Name,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sport_category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub difficulty: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub goals: BTreeSet<String>,
}

impl Program {
    #[must_use]
    pub fn new(id: ProgramID, name: Name) -> Self {
        Self {
            id,
            name,
            description: None,
            sport_category: String::new(),
            difficulty: String::new(),
            goals: BTreeSet::new(),
        }
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
