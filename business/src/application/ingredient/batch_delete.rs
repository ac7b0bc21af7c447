use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::gateway::IngredientGateway;
use crate::domain::ingredient::use_cases::batch_delete::BatchDeleteIngredientsUseCase;
use crate::domain::logger::Logger;

pub struct BatchDeleteIngredientsUseCaseImpl {
    pub gateway: Arc<dyn IngredientGateway>,
    pub refresh_catalog: Arc<dyn RefreshCatalogUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BatchDeleteIngredientsUseCase for BatchDeleteIngredientsUseCaseImpl {
    async fn execute(&self, ids: Vec<i64>) -> Result<(), IngredientError> {
        if ids.is_empty() {
            return Ok(());
        }

        // Single request; the backend deletes the set transactionally, so
        // there is no partial outcome to report here.
        self.gateway.delete_batch(&ids).await?;
        self.refresh_catalog.execute().await?;
        self.logger
            .info(&format!("Deleted {} ingredients", ids.len()));
        Ok(())
    }
}
