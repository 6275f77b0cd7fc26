use super::debounce::Debouncer;
use crate::catalog::{Catalog, CatalogProvider};
use crate::config::Config;
use crate::constants::messages;
use crate::engine;
use crate::model::{FilterState, Item, TagBadge, TagVocabulary};
use crate::services::logger::Logger;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// What the home screen shows for the current query and filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BrowseView {
    pub items: Vec<Item>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl BrowseView {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Text shown in place of the result list; `None` when there are results.
    pub fn empty_state_message(&self) -> Option<String> {
        if !self.items.is_empty() {
            return None;
        }
        let mut message = messages::NO_RESULTS.to_string();
        if let Some(suggestion) = &self.suggestion {
            message.push('\n');
            message.push_str(messages::SUGGESTION_PREFIX);
            message.push_str(suggestion);
            message.push_str(messages::SUGGESTION_SUFFIX);
        }
        Some(message)
    }
}

/// Home screen state: catalog snapshot, live and debounced query, filters.
/// Must be driven from inside a tokio runtime (see [`Debouncer`]).
pub struct BrowseSession {
    logger: Logger,
    catalog: Catalog,
    vocabulary: Arc<TagVocabulary>,
    live_query: String,
    query: Debouncer<String>,
    filters: FilterState,
}

impl BrowseSession {
    pub fn new(logger: Logger, vocabulary: Arc<TagVocabulary>, debounce: Duration) -> Self {
        Self {
            logger: logger.child("session"),
            catalog: Catalog::empty(),
            vocabulary,
            live_query: String::new(),
            query: Debouncer::new(debounce, String::new()),
            filters: FilterState::default(),
        }
    }

    pub fn from_config(logger: Logger, vocabulary: Arc<TagVocabulary>, config: &Config) -> Self {
        Self::new(logger, vocabulary, config.debounce)
    }

    pub fn debounce(&self) -> Duration {
        self.query.delay()
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Loads the catalog once. A failing provider leaves the session with an
    /// empty catalog.
    pub async fn load_catalog(&mut self, provider: &dyn CatalogProvider) -> usize {
        match Catalog::load(provider).await {
            Ok(catalog) => {
                self.logger.info(
                    "Catalog loaded",
                    Some(&serde_json::json!({
                        "provider": provider.name(),
                        "items": catalog.len(),
                    })),
                );
                self.catalog = catalog;
            }
            Err(err) => {
                self.logger.warn(
                    "Catalog unavailable, continuing with an empty catalog",
                    Some(&serde_json::json!({
                        "provider": provider.name(),
                        "error": err,
                    })),
                );
                self.catalog = Catalog::empty();
            }
        }
        self.catalog.len()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn vocabulary(&self) -> &TagVocabulary {
        &self.vocabulary
    }

    /// Keystroke handler: echoes immediately, commits after the debounce.
    pub fn input(&mut self, text: &str) {
        self.live_query = text.to_string();
        self.query.push(self.live_query.clone());
    }

    /// Sets and commits the query at once, as on submit.
    pub fn commit_query(&mut self, text: &str) {
        self.live_query = text.to_string();
        self.query.commit_now(self.live_query.clone());
    }

    pub fn live_query(&self) -> &str {
        &self.live_query
    }

    pub fn debounced_query(&self) -> String {
        self.query.current()
    }

    pub fn subscribe_query(&self) -> watch::Receiver<String> {
        self.query.subscribe()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn apply_filters(&mut self, filters: FilterState) {
        let unknown = self.vocabulary.unknown_tags(&filters);
        if !unknown.is_empty() {
            self.logger.debug(
                "Filters reference tags outside the vocabulary",
                Some(&serde_json::json!({ "tags": unknown })),
            );
        }
        self.filters = filters;
    }

    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
    }

    pub fn view(&self) -> BrowseView {
        let debounced = self.query.current();
        let outcome = engine::search(
            self.catalog.items(),
            &debounced,
            &self.live_query,
            &self.filters,
        );
        BrowseView {
            items: outcome.items.into_iter().cloned().collect(),
            suggestion: outcome.suggestion,
        }
    }

    pub fn badges(&self, item: &Item) -> Vec<TagBadge> {
        self.vocabulary.badges(item)
    }
}
