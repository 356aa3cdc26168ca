struct MuscleCategory {
    names: &'static [&'static str],
    keywords: &'static [&'static str],
}

static MUSCLE_CATEGORIES: [MuscleCategory; 8] = [
    MuscleCategory {
        names: &["legs", "leg", "beine", "quads", "quadriceps"],
        keywords: &["squat", "lunge", "leg press", "step up", "split squat"],
    },
    MuscleCategory {
        names: &["hamstrings", "posterior chain"],
        keywords: &["deadlift", "rdl", "good morning", "leg curl", "nordic"],
    },
    MuscleCategory {
        names: &["glutes", "gesäß", "po"],
        keywords: &["hip thrust", "glute bridge", "squat", "deadlift", "lunge"],
    },
    MuscleCategory {
        names: &["chest", "brust", "pecs"],
        keywords: &["bench", "chest press", "fly", "push-up", "dip"],
    },
    MuscleCategory {
        names: &["back", "rücken", "lats"],
        keywords: &["row", "pull-up", "chin-up", "pulldown", "deadlift"],
    },
    MuscleCategory {
        names: &["shoulders", "schultern", "delts"],
        keywords: &[
            "overhead press",
            "military press",
            "shoulder press",
            "raise",
            "push press",
        ],
    },
    MuscleCategory {
        names: &["arms", "arme", "biceps", "triceps"],
        keywords: &["curl", "extension", "pushdown", "close grip", "dip"],
    },
    MuscleCategory {
        names: &["core", "abs", "bauch"],
        keywords: &["plank", "crunch", "sit-up", "leg raise", "rollout"],
    },
];

/// Whether the query names a muscle category whose keywords occur in the exercise name.
pub(crate) fn is_keyword_match(normalized_query: &str, normalized_name: &str) -> bool {
    MUSCLE_CATEGORIES.iter().any(|category| {
        category.names.iter().any(|name| {
            *name == normalized_query
                || (normalized_query.len() >= 3 && name.contains(normalized_query))
        }) && category
            .keywords
            .iter()
            .any(|keyword| normalized_name.contains(keyword))
    })
}
