pub mod search {
    pub const DEBOUNCE_MS: u64 = 400;
    /// Scores must be strictly above this to be offered as a suggestion.
    pub const SUGGESTION_THRESHOLD: f64 = 0.3;
    pub const MIN_SUGGESTION_QUERY_CHARS: usize = 2;
}

pub mod env {
    pub const CATALOG_PATH: &str = "GETCOOKIN_CATALOG";
    pub const DEBOUNCE_MS: &str = "GETCOOKIN_DEBOUNCE_MS";
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

pub mod messages {
    pub const NO_RESULTS: &str = "Aucun ingrédient trouvé.";
    pub const SUGGESTION_PREFIX: &str = "Vouliez-vous dire : ";
    pub const SUGGESTION_SUFFIX: &str = " ?";
}
