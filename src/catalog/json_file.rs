use super::provider::CatalogProvider;
use crate::errors::CookinError;
use crate::model::Item;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Catalog stored as a JSON array of items on disk.
#[derive(Debug, Clone)]
pub struct JsonFileCatalog {
    path: PathBuf,
}

impl JsonFileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogProvider for JsonFileCatalog {
    fn name(&self) -> &str {
        "json_file"
    }

    async fn get_items(&self) -> Result<Vec<Item>, CookinError> {
        let raw = tokio::fs::read_to_string(&self.path).await.map_err(|err| {
            CookinError::io(format!(
                "Failed to read catalog {}: {}",
                self.path.display(),
                err
            ))
            .with_hint("Check GETCOOKIN_CATALOG or --catalog.")
        })?;
        let items: Vec<Item> = serde_json::from_str(&raw)?;
        Ok(items)
    }
}
