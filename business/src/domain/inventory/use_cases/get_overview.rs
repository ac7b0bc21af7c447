use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::model::StockedIngredient;

/// Fetches the inventory, refreshes the store, and joins each entry with
/// catalog metadata and expiry math. Entries whose ingredient no longer
/// resolves are dropped from the view.
#[async_trait]
pub trait GetInventoryOverviewUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<StockedIngredient>, InventoryError>;
}
