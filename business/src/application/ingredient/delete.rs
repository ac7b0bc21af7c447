use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::gateway::IngredientGateway;
use crate::domain::ingredient::use_cases::delete::DeleteIngredientUseCase;
use crate::domain::logger::Logger;

/// Inventory entries and cart lines referencing the deleted id become stale
/// references; derived views drop them on their next projection.
pub struct DeleteIngredientUseCaseImpl {
    pub gateway: Arc<dyn IngredientGateway>,
    pub refresh_catalog: Arc<dyn RefreshCatalogUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteIngredientUseCase for DeleteIngredientUseCaseImpl {
    async fn execute(&self, id: i64) -> Result<(), IngredientError> {
        self.gateway.delete(id).await?;
        self.refresh_catalog.execute().await?;
        self.logger.info(&format!("Ingredient {} deleted", id));
        Ok(())
    }
}
