use std::{
    collections::BTreeSet,
    sync::{Arc, RwLock},
};

use log::debug;
use prometheus_domain::SportDescriptor;

/// An immutable view of the active sport.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SportSnapshot {
    sport: Option<String>,
    primary_exercises: BTreeSet<String>,
}

impl SportSnapshot {
    #[must_use]
    pub fn new<S: SportDescriptor>(sport: &S) -> Self {
        Self {
            sport: Some(sport.name().to_string()),
            primary_exercises: sport
                .primary_exercises()
                .map(|exercise| exercise.trim().to_lowercase())
                .filter(|exercise| !exercise.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn sport(&self) -> Option<&str> {
        self.sport.as_deref()
    }

    #[must_use]
    pub fn primary_exercises(&self) -> &BTreeSet<String> {
        &self.primary_exercises
    }

    /// Whether a normalized exercise name contains one of the primary exercises.
    #[must_use]
    pub fn is_primary_exercise(&self, normalized_name: &str) -> bool {
        self.primary_exercises
            .iter()
            .any(|exercise| normalized_name.contains(exercise.as_str()))
    }
}

/// The user's active sport, shared between the profile layer and the ranking.
///
/// Writers replace the whole snapshot, so readers always observe a complete,
/// previously committed context.
#[derive(Debug, Default)]
pub struct SportContext {
    snapshot: RwLock<Arc<SportSnapshot>>,
}

impl SportContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sport<S: SportDescriptor>(sport: &S) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(SportSnapshot::new(sport))),
        }
    }

    pub fn set_user_sport<S: SportDescriptor>(&self, sport: Option<&S>) {
        let snapshot = sport.map(SportSnapshot::new).unwrap_or_default();

        match snapshot.sport() {
            Some(name) => debug!(
                "set user sport to {name} ({} primary exercises)",
                snapshot.primary_exercises().len()
            ),
            None => debug!("cleared user sport"),
        }

        *self
            .snapshot
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Arc::new(snapshot);
    }

    pub fn clear_user_sport(&self) {
        self.set_user_sport::<prometheus_domain::Sport>(None);
    }

    #[must_use]
    pub fn snapshot(&self) -> Arc<SportSnapshot> {
        Arc::clone(
            &self
                .snapshot
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner),
        )
    }
}
