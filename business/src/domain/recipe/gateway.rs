use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{Recipe, RecipeCheck};

#[async_trait]
pub trait RecipeGateway: Send + Sync {
    /// List rows may carry an empty `ingredient_ids`; use `detail` before
    /// relying on the membership set.
    async fn list(&self) -> Result<Vec<Recipe>, GatewayError>;
    async fn detail(&self, id: i64) -> Result<Recipe, GatewayError>;
    async fn check(&self, id: i64) -> Result<RecipeCheck, GatewayError>;
    async fn delete(&self, id: i64) -> Result<(), GatewayError>;
}
