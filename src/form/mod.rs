//! Form state: field keys, the live value holder, and the ways values get in
//!
//! Values arrive from a TOML field file, from `key=value` assignments, or from
//! interactive prompts. Rendering only ever sees an owned [`FieldSet`]
//! snapshot taken from [`FormState`].

pub mod field;
pub mod input;
pub mod prompt;
pub mod state;

pub use field::{Field, FieldSet};
pub use input::{load_fields, parse_fields, Assignment, InputSource};
pub use prompt::prompt_fields;
pub use state::FormState;

/// Field keys within edit distance 2 of `key`, closest first
pub fn suggest_keys(key: &str) -> Vec<String> {
    let mut candidates: Vec<(&'static str, usize)> = Field::ALL
        .iter()
        .filter_map(|field| {
            let dist = levenshtein_distance(field.key(), key);
            if dist <= 2 && dist > 0 {
                Some((field.key(), dist))
            } else {
                None
            }
        })
        .collect();

    candidates.sort_by_key(|(_, d)| *d);
    candidates
        .into_iter()
        .map(|(name, _)| name.to_string())
        .take(3)
        .collect()
}

fn levenshtein_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let m = a_chars.len();
    let n = b_chars.len();

    if m == 0 {
        return n;
    }
    if n == 0 {
        return m;
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];

    for i in 1..=m {
        curr[0] = i;
        for j in 1..=n {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}
