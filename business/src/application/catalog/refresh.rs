use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::cache::CatalogCache;
use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::ingredient::gateway::IngredientGateway;
use crate::domain::logger::Logger;
use crate::domain::recipe::gateway::RecipeGateway;

pub struct RefreshCatalogUseCaseImpl {
    pub ingredient_gateway: Arc<dyn IngredientGateway>,
    pub recipe_gateway: Arc<dyn RecipeGateway>,
    pub catalog: Arc<CatalogCache>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshCatalogUseCase for RefreshCatalogUseCaseImpl {
    async fn execute(&self) -> Result<(), GatewayError> {
        let ingredients = self.ingredient_gateway.list().await?;
        let recipes = self.recipe_gateway.list().await?;
        self.logger.debug(&format!(
            "Catalog refreshed: {} ingredients, {} recipes",
            ingredients.len(),
            recipes.len()
        ));

        self.catalog.replace_ingredients(ingredients);
        self.catalog.replace_recipes(recipes);
        Ok(())
    }
}
