mod builtin;
mod json_file;
mod provider;

pub use builtin::BuiltinCatalog;
pub use json_file::JsonFileCatalog;
pub use provider::CatalogProvider;

use crate::errors::CookinError;
use crate::model::Item;
use std::collections::HashSet;
use std::sync::Arc;

/// Read-only snapshot of the items available for a session.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Arc<[Item]>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::empty()
    }
}

impl Catalog {
    pub fn new(items: Vec<Item>) -> Result<Self, CookinError> {
        let mut seen = HashSet::new();
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(CookinError::invalid_data(format!(
                    "Catalog item '{}' has an empty id",
                    item.name
                )));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CookinError::invalid_data(format!(
                    "Duplicate catalog id '{}'",
                    item.id
                ))
                .with_hint("Item ids are stable slugs and must be unique."));
            }
        }
        Ok(Self {
            items: items.into(),
        })
    }

    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }

    /// Fetches from `provider` and validates the result.
    pub async fn load(provider: &dyn CatalogProvider) -> Result<Self, CookinError> {
        let items = provider.get_items().await?;
        Self::new(items)
    }
}
