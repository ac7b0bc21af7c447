use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;

#[async_trait]
pub trait DeleteIngredientUseCase: Send + Sync {
    async fn execute(&self, id: i64) -> Result<(), IngredientError>;
}
