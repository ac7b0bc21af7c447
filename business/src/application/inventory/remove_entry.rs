use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::store::InventoryStore;
use crate::domain::inventory::use_cases::remove_entry::RemoveInventoryEntryUseCase;
use crate::domain::logger::Logger;

pub struct RemoveInventoryEntryUseCaseImpl {
    pub gateway: Arc<dyn InventoryGateway>,
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveInventoryEntryUseCase for RemoveInventoryEntryUseCaseImpl {
    async fn execute(&self, id: i64) -> Result<(), InventoryError> {
        self.gateway.remove(id).await?;
        let entries = self.gateway.list().await?;
        self.store.replace(entries);
        self.logger.info(&format!("Inventory entry {} removed", id));
        Ok(())
    }
}
