use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{InventoryDraft, InventoryEntry};

#[async_trait]
pub trait InventoryGateway: Send + Sync {
    async fn list(&self) -> Result<Vec<InventoryEntry>, GatewayError>;
    /// Manual stocking; the draft carries the client-derived expiry date.
    async fn add(&self, draft: &InventoryDraft) -> Result<(), GatewayError>;
    async fn update(&self, entry: &InventoryEntry) -> Result<(), GatewayError>;
    async fn remove(&self, id: i64) -> Result<(), GatewayError>;
    /// Consumes one batch of the ingredient, keyed by ingredient id.
    async fn consume(&self, ingredient_id: i64) -> Result<(), GatewayError>;
}
