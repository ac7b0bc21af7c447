use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;

/// Deletes a recipe from the catalog. No cascade: the cart and inventory
/// reference ingredients, not recipes.
#[async_trait]
pub trait DeleteRecipeUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), RecipeError>;
}
