use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::model::InventoryEntry;
use crate::domain::inventory::store::InventoryStore;
use crate::domain::inventory::use_cases::update_entry::UpdateInventoryEntryUseCase;
use crate::domain::logger::Logger;

pub struct UpdateInventoryEntryUseCaseImpl {
    pub gateway: Arc<dyn InventoryGateway>,
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateInventoryEntryUseCase for UpdateInventoryEntryUseCaseImpl {
    async fn execute(&self, entry: InventoryEntry) -> Result<(), InventoryError> {
        self.gateway.update(&entry).await?;
        let entries = self.gateway.list().await?;
        self.store.replace(entries);
        self.logger
            .info(&format!("Inventory entry {} updated", entry.id));
        Ok(())
    }
}
