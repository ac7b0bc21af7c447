use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::gateway::IngredientGateway;
use crate::domain::ingredient::model::IngredientDraft;
use crate::domain::ingredient::use_cases::create::CreateIngredientParams;
use crate::domain::ingredient::use_cases::update::UpdateIngredientUseCase;
use crate::domain::logger::Logger;

pub struct UpdateIngredientUseCaseImpl {
    pub gateway: Arc<dyn IngredientGateway>,
    pub refresh_catalog: Arc<dyn RefreshCatalogUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateIngredientUseCase for UpdateIngredientUseCaseImpl {
    async fn execute(
        &self,
        id: i64,
        params: CreateIngredientParams,
    ) -> Result<(), IngredientError> {
        let draft = IngredientDraft::new(
            params.name,
            params.category,
            params.shelf_life_days,
            params.storage_type,
            params.image_url,
        )?;

        self.logger.info(&format!("Updating ingredient {}", id));
        self.gateway.update(id, &draft).await?;
        self.refresh_catalog.execute().await?;
        Ok(())
    }
}
