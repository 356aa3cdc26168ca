use std::{cmp::Reverse, sync::Arc};

use log::debug;
use prometheus_domain::SportDescriptor;

use crate::{Query, Searchable, SportContext, score};

#[derive(Debug, PartialEq, Eq)]
pub struct ScoredResult<'a, T> {
    pub entity: &'a T,
    pub score: u32,
}

/// Entry point for ranking catalog entities.
///
/// None of the operations mutate the given entities. Ties keep their input order.
#[derive(Debug, Default, Clone)]
pub struct Ranker {
    context: Arc<SportContext>,
}

impl Ranker {
    #[must_use]
    pub fn new(context: Arc<SportContext>) -> Self {
        Self { context }
    }

    #[must_use]
    pub fn context(&self) -> &Arc<SportContext> {
        &self.context
    }

    /// Replace the active sport. `None` clears the personalization.
    pub fn set_user_sport<S: SportDescriptor>(&self, sport: Option<&S>) {
        self.context.set_user_sport(sport);
    }

    #[must_use]
    pub fn sort_by_importance<'a, T: Searchable>(&self, entities: &'a [T]) -> Vec<&'a T> {
        self.rank_by_importance(entities)
            .into_iter()
            .map(|result| result.entity)
            .collect()
    }

    #[must_use]
    pub fn rank_by_importance<'a, T: Searchable>(
        &self,
        entities: &'a [T],
    ) -> Vec<ScoredResult<'a, T>> {
        let mut results = entities
            .iter()
            .map(|entity| ScoredResult {
                entity,
                score: score::importance(entity),
            })
            .collect::<Vec<_>>();
        sort_descending(&mut results);
        results
    }

    /// Entities matching the query, best match first.
    ///
    /// A blank query orders all entities by importance instead.
    #[must_use]
    pub fn search<'a, T: Searchable>(&self, entities: &'a [T], query: &str) -> Vec<&'a T> {
        self.search_scored(entities, query)
            .into_iter()
            .map(|result| result.entity)
            .collect()
    }

    #[must_use]
    pub fn search_scored<'a, T: Searchable>(
        &self,
        entities: &'a [T],
        query: &str,
    ) -> Vec<ScoredResult<'a, T>> {
        let Some(query) = Query::new(query) else {
            return self.rank_by_importance(entities);
        };
        let query = if T::PROFILE.expand_synonyms {
            query.with_synonyms()
        } else {
            query
        };
        let sport = self.context.snapshot();

        let mut results = entities
            .iter()
            .map(|entity| ScoredResult {
                entity,
                score: score::score(entity, &query, &sport),
            })
            .filter(|result| result.score > 0)
            .collect::<Vec<_>>();
        sort_descending(&mut results);

        debug!(
            "search for \"{}\" matched {} of {} entities",
            query.as_str(),
            results.len(),
            entities.len()
        );

        results
    }
}

fn sort_descending<T>(results: &mut [ScoredResult<'_, T>]) {
    // stable, so equal scores keep their input order
    results.sort_by_key(|result| Reverse(result.score));
}
