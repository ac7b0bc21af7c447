use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::store::InventoryStore;
use crate::domain::inventory::use_cases::batch_remove::BatchRemoveInventoryUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::batch::BatchOutcome;

pub struct BatchRemoveInventoryUseCaseImpl {
    pub gateway: Arc<dyn InventoryGateway>,
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BatchRemoveInventoryUseCase for BatchRemoveInventoryUseCaseImpl {
    async fn execute(&self, ids: Vec<i64>) -> Result<BatchOutcome, InventoryError> {
        let mut handles = Vec::with_capacity(ids.len());
        for id in ids {
            let gateway = Arc::clone(&self.gateway);
            handles.push((id, tokio::spawn(async move { gateway.remove(id).await })));
        }

        let mut outcome = BatchOutcome::default();
        for (id, handle) in handles {
            match handle.await {
                Ok(Ok(())) => outcome.record_success(id),
                Ok(Err(error)) => outcome.record_failure(id, error),
                Err(_) => outcome.record_failure(id, GatewayError::Network),
            }
        }

        if !outcome.is_complete() {
            self.logger.warn(&format!(
                "Inventory batch removal incomplete: {} removed, {} failed",
                outcome.succeeded.len(),
                outcome.failed.len()
            ));
            return Err(InventoryError::BatchIncomplete(outcome));
        }

        let entries = self.gateway.list().await?;
        self.store.replace(entries);
        self.logger.info(&format!(
            "Removed {} inventory entries",
            outcome.succeeded.len()
        ));
        Ok(outcome)
    }
}
