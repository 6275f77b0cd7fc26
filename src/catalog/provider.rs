use crate::errors::CookinError;
use crate::model::Item;
use async_trait::async_trait;

/// Source of catalog items, fetched once per session.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    fn name(&self) -> &str;

    async fn get_items(&self) -> Result<Vec<Item>, CookinError>;
}
