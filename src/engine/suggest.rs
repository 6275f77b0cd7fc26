use crate::constants::search::SUGGESTION_THRESHOLD;
use crate::model::Item;
use std::collections::HashMap;

fn normalize_token(value: &str) -> Vec<char> {
    value
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect()
}

fn bigrams(chars: &[char]) -> impl Iterator<Item = (char, char)> + '_ {
    chars.windows(2).map(|pair| (pair[0], pair[1]))
}

/// Dice coefficient over character bigrams, in `0.0..=1.0`. Whitespace is
/// ignored; bigrams compare case-sensitively.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize_token(a);
    let b = normalize_token(b);
    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut counts: HashMap<(char, char), usize> = HashMap::new();
    for pair in bigrams(&a) {
        *counts.entry(pair).or_insert(0) += 1;
    }
    let mut shared = 0usize;
    for pair in bigrams(&b) {
        if let Some(count) = counts.get_mut(&pair) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }
    (2 * shared) as f64 / (a.len() + b.len() - 2) as f64
}

/// Closest catalog name to `input`, if it scores above the threshold.
/// Ties go to the earliest item in catalog order.
pub fn suggest(catalog: &[Item], input: &str) -> Option<String> {
    let mut best: Option<(&str, f64)> = None;
    for item in catalog {
        let score = similarity(input, &item.name);
        if best.map_or(true, |(_, top)| score > top) {
            best = Some((item.name.as_str(), score));
        }
    }
    best.filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
        .map(|(name, _)| name.to_string())
}
