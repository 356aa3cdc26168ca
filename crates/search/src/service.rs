use log::{debug, error};
use prometheus_domain::{
    Exercise, ExerciseRepository, Program, ProgramRepository, ReadError, StorageError, Workout,
    WorkoutRepository,
};

use crate::{ExerciseFilter, Ranker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of returned entities.
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { limit: 50 }
    }
}

/// Searches the catalog provided by a repository.
pub struct SearchService<R> {
    repository: R,
    ranker: Ranker,
    config: SearchConfig,
}

impl<R> SearchService<R> {
    pub fn new(repository: R, ranker: Ranker) -> Self {
        Self::with_config(repository, ranker, SearchConfig::default())
    }

    pub fn with_config(repository: R, ranker: Ranker, config: SearchConfig) -> Self {
        Self {
            repository,
            ranker,
            config,
        }
    }

    pub fn ranker(&self) -> &Ranker {
        &self.ranker
    }
}

macro_rules! log_on_error {
    ($func: expr, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                ReadError::Storage(StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: ExerciseRepository> SearchService<R> {
    pub async fn search_exercises(
        &self,
        query: &str,
        filter: &ExerciseFilter,
    ) -> Result<Vec<Exercise>, ReadError> {
        let exercises = log_on_error!(self.repository.read_exercises(), "read", "exercises")?;
        let candidates = filter.exercises(exercises.iter());

        Ok(self
            .ranker
            .search(&candidates, query)
            .into_iter()
            .take(self.config.limit)
            .map(|exercise| (**exercise).clone())
            .collect())
    }
}

impl<R: WorkoutRepository> SearchService<R> {
    pub async fn search_workouts(&self, query: &str) -> Result<Vec<Workout>, ReadError> {
        let workouts = log_on_error!(self.repository.read_workouts(), "read", "workouts")?;

        Ok(self
            .ranker
            .search(&workouts, query)
            .into_iter()
            .take(self.config.limit)
            .cloned()
            .collect())
    }
}

impl<R: ProgramRepository> SearchService<R> {
    pub async fn search_programs(&self, query: &str) -> Result<Vec<Program>, ReadError> {
        let programs = log_on_error!(self.repository.read_programs(), "read", "programs")?;

        Ok(self
            .ranker
            .search(&programs, query)
            .into_iter()
            .take(self.config.limit)
            .cloned()
            .collect())
    }
}
