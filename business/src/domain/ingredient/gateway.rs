use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Ingredient, IngredientDraft};

/// Port to the backend ingredient catalog. The backend owns all catalog
/// state; the client only reads and forwards mutations.
#[async_trait]
pub trait IngredientGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<Ingredient>, GatewayError>;
    async fn create(&self, draft: &IngredientDraft) -> Result<(), GatewayError>;
    async fn update(&self, id: i64, draft: &IngredientDraft) -> Result<(), GatewayError>;
    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
    /// Single request; the backend deletes the whole set.
    async fn delete_batch(&self, ids: &[i64]) -> Result<(), GatewayError>;
}
