use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::gateway::RecipeGateway;
use crate::domain::recipe::use_cases::delete::DeleteRecipeUseCase;

/// Deleting a recipe never touches the cart or inventory; both reference
/// ingredients, not recipes.
pub struct DeleteRecipeUseCaseImpl {
    pub gateway: Arc<dyn RecipeGateway>,
    pub refresh_catalog: Arc<dyn RefreshCatalogUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteRecipeUseCase for DeleteRecipeUseCaseImpl {
    async fn execute(&self, id: i64) -> Result<(), RecipeError> {
        self.gateway.delete(id).await?;
        self.refresh_catalog.execute().await?;
        self.logger.info(&format!("Recipe {} deleted", id));
        Ok(())
    }
}
