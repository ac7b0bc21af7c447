use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeCheck;

/// Asks the backend whether current stock covers the recipe.
#[async_trait]
pub trait CheckRecipeUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<RecipeCheck, RecipeError>;
}
