//! Edit distance for typo-tolerant equality.
//!
//! Not used by the default scoring paths. Inputs are bounded to `MAX_INPUT_LEN`
//! characters, which caps the size of the distance table.

use crate::{MAX_INPUT_LEN, truncate};

pub const DEFAULT_THRESHOLD: usize = 2;

/// Levenshtein distance with unit costs for insertion, deletion and substitution.
#[must_use]
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a = truncate(a, MAX_INPUT_LEN).chars().collect::<Vec<_>>();
    let b = truncate(b, MAX_INPUT_LEN).chars().collect::<Vec<_>>();

    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];

    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in table[0].iter_mut().enumerate() {
        *cell = j;
    }

    for i in 1..=a.len() {
        for j in 1..=b.len() {
            let substitution = table[i - 1][j - 1] + usize::from(a[i - 1] != b[j - 1]);
            let deletion = table[i - 1][j] + 1;
            let insertion = table[i][j - 1] + 1;
            table[i][j] = substitution.min(deletion).min(insertion);
        }
    }

    table[a.len()][b.len()]
}

/// Whether `a` and `b` are at most `threshold` edits apart.
#[must_use]
pub fn fuzzy_match(a: &str, b: &str, threshold: usize) -> bool {
    if a == b {
        return true;
    }

    let a_len = truncate(a, MAX_INPUT_LEN).chars().count();
    let b_len = truncate(b, MAX_INPUT_LEN).chars().count();

    // length difference is a lower bound on the edit distance
    if a_len.abs_diff(b_len) > threshold {
        return false;
    }

    edit_distance(a, b) <= threshold
}
