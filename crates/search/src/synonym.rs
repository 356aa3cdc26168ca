//! Query expansion through abbreviations, German translations and common misspellings.

use std::collections::HashSet;

use derive_more::Deref;

/// Canonical key terms and their equivalents.
static SYNONYMS: [(&str, &[&str]); 44] = [
    ("rdl", &["romanian deadlift"]),
    ("sldl", &["stiff leg deadlift", "stiff-legged deadlift"]),
    ("ohp", &["overhead press", "military press"]),
    ("bp", &["bench press"]),
    ("dl", &["deadlift"]),
    ("ghr", &["glute ham raise"]),
    ("hspu", &["handstand push-up"]),
    ("t2b", &["toes to bar"]),
    ("c2b", &["chest to bar"]),
    ("kb", &["kettlebell"]),
    ("db", &["dumbbell"]),
    ("bb", &["barbell"]),
    ("ssb", &["safety bar squat"]),
    ("benchpress", &["bench press"]),
    ("bench pres", &["bench press"]),
    ("deadlfit", &["deadlift"]),
    ("dedlift", &["deadlift"]),
    ("sqaut", &["squat"]),
    ("sqat", &["squat"]),
    ("pullup", &["pull-up", "pull up"]),
    ("chinup", &["chin-up", "chin up"]),
    ("pushup", &["push-up", "push up"]),
    ("situp", &["sit-up", "sit up"]),
    ("kniebeuge", &["squat"]),
    ("frontkniebeuge", &["front squat"]),
    ("kreuzheben", &["deadlift"]),
    ("bankdrücken", &["bench press"]),
    ("schulterdrücken", &["overhead press", "shoulder press"]),
    ("klimmzug", &["pull-up", "pull up"]),
    ("rudern", &["row"]),
    ("ausfallschritt", &["lunge"]),
    ("liegestütz", &["push-up", "push up"]),
    ("umsetzen", &["clean"]),
    ("reißen", &["snatch"]),
    ("stoßen", &["jerk"]),
    ("langhantel", &["barbell"]),
    ("kurzhantel", &["dumbbell"]),
    ("hantel", &["dumbbell", "barbell"]),
    ("brust", &["chest"]),
    ("beine", &["legs"]),
    ("rücken", &["back"]),
    ("schultern", &["shoulders"]),
    ("bauch", &["abs", "core"]),
    ("wadenheben", &["calf raise"]),
];

/// The original query together with all of its synonym variants.
#[derive(Deref, Debug, Clone, PartialEq, Eq)]
pub struct ExpandedQuerySet(HashSet<String>);

impl ExpandedQuerySet {
    /// Whether any term of the set occurs in `text`.
    #[must_use]
    pub fn any_contained_in(&self, text: &str) -> bool {
        self.0.iter().any(|term| text.contains(term.as_str()))
    }
}

/// Expand a normalized query into its synonym set.
///
/// The result always contains the query itself.
#[must_use]
pub fn expand(normalized_query: &str) -> ExpandedQuerySet {
    let mut terms = HashSet::from([normalized_query.to_string()]);

    if normalized_query.is_empty() {
        return ExpandedQuerySet(terms);
    }

    for (key, values) in &SYNONYMS {
        if related(normalized_query, key) {
            terms.extend(values.iter().map(ToString::to_string));
        }
        if values.iter().any(|value| related(normalized_query, value)) {
            terms.insert((*key).to_string());
            terms.extend(values.iter().map(ToString::to_string));
        }
    }

    ExpandedQuerySet(terms)
}

fn related(query: &str, term: &str) -> bool {
    query == term || query.contains(term) || term.contains(query)
}
