//! Pure search over a catalog snapshot: the six-predicate filter plus the
//! "did you mean" fallback used when nothing matches.

mod filter;
mod suggest;

pub use filter::{filter_items, matches};
pub use suggest::{similarity, suggest};

use crate::constants::search::MIN_SUGGESTION_QUERY_CHARS;
use crate::model::{FilterState, Item};

#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<'a> {
    pub items: Vec<&'a Item>,
    pub suggestion: Option<String>,
}

/// Filters with the committed query and, when nothing matches, offers a
/// suggestion for what the user is typing right now.
pub fn search<'a>(
    catalog: &'a [Item],
    debounced_query: &str,
    live_query: &str,
    filters: &FilterState,
) -> SearchOutcome<'a> {
    let items = filter_items(catalog, debounced_query, filters);
    let long_enough = live_query.chars().count() >= MIN_SUGGESTION_QUERY_CHARS;
    let suggestion = if items.is_empty() && long_enough {
        suggest(catalog, live_query)
    } else {
        None
    };
    SearchOutcome { items, suggestion }
}
