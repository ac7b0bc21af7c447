use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;

#[async_trait]
pub trait RemoveInventoryEntryUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), InventoryError>;
}
