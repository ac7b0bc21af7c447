use async_trait::async_trait;

use crate::domain::inventory::errors::InventoryError;
use crate::domain::shared::batch::BatchOutcome;

/// Concurrent per-entry removals joined with wait-for-all; same
/// partial-completion semantics as cart batch removal.
#[async_trait]
pub trait BatchRemoveInventoryUseCase: Send + Sync {
    async fn execute(&self, ids: Vec<i64>) -> Result<BatchOutcome, InventoryError>;
}
