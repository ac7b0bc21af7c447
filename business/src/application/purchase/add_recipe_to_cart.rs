use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::cache::CatalogCache;
use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::use_cases::add_recipe_to_cart::AddRecipeToCartUseCase;
use crate::domain::purchase::use_cases::add_to_cart::AddToCartUseCase;
use crate::domain::recipe::gateway::RecipeGateway;
use crate::domain::recipe::selection::RecipeSelection;

pub struct AddRecipeToCartUseCaseImpl {
    pub recipe_gateway: Arc<dyn RecipeGateway>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub catalog: Arc<CatalogCache>,
    pub selection: Arc<RecipeSelection>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddRecipeToCartUseCase for AddRecipeToCartUseCaseImpl {
    async fn execute(&self, recipe_id: i64) -> Result<usize, PurchaseError> {
        if self.catalog.recipe(recipe_id).is_none() {
            return Err(PurchaseError::RecipeNotFound);
        }

        // List rows may be summaries without ingredient ids; the detail
        // endpoint is authoritative for the membership set.
        let recipe = self.recipe_gateway.detail(recipe_id).await?;

        if recipe.ingredient_ids.is_empty() {
            self.logger.info(&format!(
                "Recipe {} has no ingredients, nothing to add",
                recipe_id
            ));
        } else {
            self.add_to_cart
                .execute(recipe.ingredient_ids.clone())
                .await?;
        }

        self.selection.select(recipe_id);
        self.logger.info(&format!(
            "Recipe {} added to shopping list ({} ingredients)",
            recipe_id,
            recipe.ingredient_ids.len()
        ));
        Ok(recipe.ingredient_ids.len())
    }
}
