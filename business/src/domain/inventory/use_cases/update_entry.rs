use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::model::InventoryEntry;

#[async_trait]
pub trait UpdateInventoryEntryUseCase: Send + Sync {
    async fn execute(&self, entry: InventoryEntry) -> Result<(), InventoryError>;
}
