use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::store::InventoryStore;
use crate::domain::inventory::use_cases::consume::ConsumeIngredientUseCase;
use crate::domain::logger::Logger;

pub struct ConsumeIngredientUseCaseImpl {
    pub gateway: Arc<dyn InventoryGateway>,
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConsumeIngredientUseCase for ConsumeIngredientUseCaseImpl {
    async fn execute(&self, ingredient_id: i64) -> Result<(), InventoryError> {
        self.gateway.consume(ingredient_id).await?;
        let entries = self.gateway.list().await?;
        self.store.replace(entries);
        self.logger
            .info(&format!("Consumed one batch of ingredient {}", ingredient_id));
        Ok(())
    }
}
