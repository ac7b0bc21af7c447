use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;

/// One backend call for the whole set, unlike cart batch removal, which is
/// N independent requests.
#[async_trait]
pub trait BatchDeleteIngredientsUseCase: Send + Sync {
    async fn execute(&self, ids: Vec<i64>) -> Result<(), IngredientError>;
}
