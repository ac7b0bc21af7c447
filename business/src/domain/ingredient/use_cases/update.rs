use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::use_cases::create::CreateIngredientParams;

/// Full replace of one catalog entry. Existing inventory keeps the expiry
/// dates derived from the shelf life known at stocking time.
#[async_trait]
pub trait UpdateIngredientUseCase: Send + Sync {
    async fn execute(&self, id: i64, params: CreateIngredientParams)
        -> Result<(), IngredientError>;
}
