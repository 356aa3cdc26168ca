//! Relevance scoring shared by all catalog entities.
//!
//! Every entity runs through the same pipeline: a tiered name match, secondary
//! field bonuses and finally entity bonuses. The differences between exercises,
//! workouts and programs are captured by their [`ScoringProfile`].

use prometheus_domain::{Exercise, Program, Workout};

use crate::{
    MovementClass, SportSnapshot, classify, expand, muscle, normalize, synonym::ExpandedQuerySet,
    tokenize,
};

/// A normalized, non-blank search query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    normalized: String,
    tokens: Vec<String>,
    expansion: Option<Expansion>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Expansion {
    query: ExpandedQuerySet,
    tokens: Vec<ExpandedQuerySet>,
}

impl Query {
    /// Returns `None` for a blank query.
    #[must_use]
    pub fn new(raw: &str) -> Option<Self> {
        let normalized = normalize(raw);

        if normalized.is_empty() {
            return None;
        }

        let tokens = tokenize(&normalized)
            .into_iter()
            .map(ToString::to_string)
            .collect();

        Some(Self {
            normalized,
            tokens,
            expansion: None,
        })
    }

    #[must_use]
    pub fn with_synonyms(mut self) -> Self {
        self.expansion = Some(Expansion {
            query: expand(&self.normalized),
            tokens: self.tokens.iter().map(|token| expand(token)).collect(),
        });
        self
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    #[must_use]
    pub fn expanded(&self) -> Option<&ExpandedQuerySet> {
        self.expansion.as_ref().map(|expansion| &expansion.query)
    }

    fn token_matches(&self, index: usize, name: &str) -> bool {
        name.contains(self.tokens[index].as_str())
            || self
                .expansion
                .as_ref()
                .and_then(|expansion| expansion.tokens.get(index))
                .is_some_and(|expanded| expanded.any_contained_in(name))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Muscle,
    Equipment,
    SportTag,
    ExerciseName,
    MuscleGroup,
    Description,
    SportCategory,
    Difficulty,
    Goal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SecondaryMode {
    /// Applied only if the name did not match. All hits add up.
    Fallback,
    /// Each check applies only while the score is still zero, so at most one hit counts.
    FirstHit,
    /// Applied independently of the name match.
    Additive,
}

/// Points per name-match tier. Only the first matching tier counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NameTiers {
    pub exact: u32,
    pub prefix: u32,
    pub first_token: Option<u32>,
    pub token_prefix: Option<u32>,
    pub contains: u32,
    pub synonym: Option<u32>,
    pub per_token: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BonusTable {
    pub sport: u32,
    pub compound: u32,
    pub transition: u32,
    pub specialty: u32,
    pub isolation: u32,
    pub video: u32,
    pub technique_guide: u32,
}

impl BonusTable {
    #[must_use]
    pub fn movement(&self, class: MovementClass) -> u32 {
        match class {
            MovementClass::Compound => self.compound,
            MovementClass::Transition => self.transition,
            MovementClass::Specialty => self.specialty,
            MovementClass::Isolation => self.isolation,
        }
    }

    fn apply<T: Searchable>(
        &self,
        entity: &T,
        normalized_name: &str,
        sport: Option<&SportSnapshot>,
    ) -> u32 {
        let mut bonus = self.movement(classify(normalized_name));

        if sport.is_some_and(|sport| sport.is_primary_exercise(normalized_name)) {
            bonus += self.sport;
        }
        if entity.has_video() {
            bonus += self.video;
        }
        if entity.has_technique_guide() {
            bonus += self.technique_guide;
        }

        bonus
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoringProfile {
    pub name: NameTiers,
    pub expand_synonyms: bool,
    pub secondary: &'static [(Field, u32)],
    pub secondary_mode: SecondaryMode,
    pub muscle_keyword: Option<u32>,
    /// Added to a nonzero search score.
    pub relevance: Option<BonusTable>,
    /// Sole ranking criterion for a blank query.
    pub importance: Option<BonusTable>,
}

pub const EXERCISE_PROFILE: ScoringProfile = ScoringProfile {
    name: NameTiers {
        exact: 100,
        prefix: 80,
        // subsumed by `prefix`, since names are trimmed
        first_token: Some(70),
        token_prefix: Some(50),
        contains: 30,
        synonym: Some(25),
        per_token: 15,
    },
    expand_synonyms: true,
    secondary: &[
        (Field::Muscle, 20),
        (Field::Equipment, 15),
        (Field::SportTag, 10),
    ],
    secondary_mode: SecondaryMode::Fallback,
    muscle_keyword: Some(15),
    relevance: Some(BonusTable {
        sport: 75,
        compound: 50,
        transition: 25,
        specialty: 10,
        isolation: 0,
        video: 5,
        technique_guide: 5,
    }),
    importance: Some(BonusTable {
        sport: 0,
        compound: 100,
        transition: 50,
        specialty: 25,
        isolation: 10,
        video: 5,
        technique_guide: 5,
    }),
};

const COLLECTION_TIERS: NameTiers = NameTiers {
    exact: 100,
    prefix: 80,
    first_token: None,
    token_prefix: None,
    contains: 50,
    synonym: None,
    per_token: 20,
};

pub const WORKOUT_PROFILE: ScoringProfile = ScoringProfile {
    name: COLLECTION_TIERS,
    expand_synonyms: false,
    secondary: &[(Field::ExerciseName, 25), (Field::MuscleGroup, 15)],
    secondary_mode: SecondaryMode::FirstHit,
    muscle_keyword: None,
    relevance: None,
    importance: None,
};

pub const PROGRAM_PROFILE: ScoringProfile = ScoringProfile {
    name: COLLECTION_TIERS,
    expand_synonyms: false,
    secondary: &[
        (Field::Description, 15),
        (Field::SportCategory, 20),
        (Field::Difficulty, 10),
        (Field::Goal, 15),
    ],
    secondary_mode: SecondaryMode::Additive,
    muscle_keyword: None,
    relevance: None,
    importance: None,
};

/// A catalog entity that can be ranked.
pub trait Searchable {
    const PROFILE: ScoringProfile;

    fn display_name(&self) -> &str;

    fn field(&self, field: Field) -> Vec<&str>;

    fn has_video(&self) -> bool {
        false
    }

    fn has_technique_guide(&self) -> bool {
        false
    }
}

impl Searchable for Exercise {
    const PROFILE: ScoringProfile = EXERCISE_PROFILE;

    fn display_name(&self) -> &str {
        self.name.as_ref()
    }

    fn field(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Muscle => self.muscles().collect(),
            Field::Equipment => self.equipment.iter().map(String::as_str).collect(),
            Field::SportTag => self.sport_tags.iter().map(String::as_str).collect(),
            _ => vec![],
        }
    }

    fn has_video(&self) -> bool {
        self.has_video
    }

    fn has_technique_guide(&self) -> bool {
        self.has_technique_guide
    }
}

impl Searchable for Workout {
    const PROFILE: ScoringProfile = WORKOUT_PROFILE;

    fn display_name(&self) -> &str {
        self.name.as_ref()
    }

    fn field(&self, field: Field) -> Vec<&str> {
        match field {
            Field::ExerciseName => self.exercises.iter().map(|e| e.name.as_str()).collect(),
            Field::MuscleGroup => self
                .exercises
                .iter()
                .map(|e| e.muscle_group.as_str())
                .collect(),
            _ => vec![],
        }
    }
}

impl Searchable for Program {
    const PROFILE: ScoringProfile = PROGRAM_PROFILE;

    fn display_name(&self) -> &str {
        self.name.as_ref()
    }

    fn field(&self, field: Field) -> Vec<&str> {
        match field {
            Field::Description => self.description.iter().map(String::as_str).collect(),
            Field::SportCategory => vec![self.sport_category.as_str()],
            Field::Difficulty => vec![self.difficulty.as_str()],
            Field::Goal => self.goals.iter().map(String::as_str).collect(),
            _ => vec![],
        }
    }
}

impl<T: Searchable> Searchable for &T {
    const PROFILE: ScoringProfile = T::PROFILE;

    fn display_name(&self) -> &str {
        (**self).display_name()
    }

    fn field(&self, field: Field) -> Vec<&str> {
        (**self).field(field)
    }

    fn has_video(&self) -> bool {
        (**self).has_video()
    }

    fn has_technique_guide(&self) -> bool {
        (**self).has_technique_guide()
    }
}

/// Points of the highest name-match tier reached by the entity.
#[must_use]
pub fn name_match_score<T: Searchable>(entity: &T, query: &Query) -> u32 {
    name_tier(&normalize(entity.display_name()), query, &T::PROFILE.name)
}

/// Search relevance of an entity. Zero means the entity does not match.
#[must_use]
pub fn score<T: Searchable>(entity: &T, query: &Query, sport: &SportSnapshot) -> u32 {
    let profile = T::PROFILE;
    let name = normalize(entity.display_name());
    let mut score = name_tier(&name, query, &profile.name);
    let name_matched = score > 0;

    for (field, points) in profile.secondary {
        let applicable = match profile.secondary_mode {
            SecondaryMode::Fallback => !name_matched,
            SecondaryMode::FirstHit => score == 0,
            SecondaryMode::Additive => true,
        };

        if applicable
            && entity
                .field(*field)
                .iter()
                .any(|value| normalize(value).contains(query.as_str()))
        {
            score += points;
        }
    }

    if let Some(points) = profile
        .muscle_keyword
        .filter(|_| !name_matched && muscle::is_keyword_match(query.as_str(), &name))
    {
        score += points;
    }

    if score > 0
        && let Some(relevance) = profile.relevance
    {
        score += relevance.apply(entity, &name, Some(sport));
    }

    score
}

/// Intrinsic importance of an entity, independent of any query.
#[must_use]
pub fn importance<T: Searchable>(entity: &T) -> u32 {
    T::PROFILE.importance.map_or(0, |importance| {
        importance.apply(entity, &normalize(entity.display_name()), None)
    })
}

fn name_tier(name: &str, query: &Query, tiers: &NameTiers) -> u32 {
    let q = query.as_str();
    let tokens = tokenize(name);

    if name == q {
        return tiers.exact;
    }
    if name.starts_with(q) {
        return tiers.prefix;
    }
    if let Some(points) = tiers
        .first_token
        .filter(|_| tokens.first().is_some_and(|token| token.starts_with(q)))
    {
        return points;
    }
    if let Some(points) = tiers
        .token_prefix
        .filter(|_| tokens.iter().any(|token| token.starts_with(q)))
    {
        return points;
    }
    if name.contains(q) {
        return tiers.contains;
    }
    let synonym_match = query
        .expanded()
        .is_some_and(|expanded| expanded.any_contained_in(name));
    if let Some(points) = tiers.synonym.filter(|_| synonym_match) {
        return points;
    }

    let matched_tokens = (0..query.tokens.len())
        .filter(|index| {
            if tiers.synonym.is_some() {
                query.token_matches(*index, name)
            } else {
                name.contains(query.tokens[*index].as_str())
            }
        })
        .count();

    tiers
        .per_token
        .saturating_mul(u32::try_from(matched_tokens).unwrap_or(u32::MAX))
}
