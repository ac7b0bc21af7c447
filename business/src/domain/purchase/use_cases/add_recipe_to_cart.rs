use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;

/// Expands a recipe into cart additions: fetches the recipe detail (list
/// rows may omit ingredient ids), forwards the ids to the cart, and marks
/// the recipe selected. Returns how many ingredients were forwarded; a
/// recipe with none is a no-op success.
#[async_trait]
pub trait AddRecipeToCartUseCase: Send + Sync {
    async fn execute(&self, recipe_id: i64) -> Result<usize, PurchaseError>;
}
