use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;

/// Uses up one batch of an ingredient, keyed by ingredient id.
#[async_trait]
pub trait ConsumeIngredientUseCase: Send + Sync {
    async fn execute(&self, ingredient_id: i64) -> Result<(), InventoryError>;
}
