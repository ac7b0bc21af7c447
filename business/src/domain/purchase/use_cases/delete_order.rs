use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;

/// Deletes a historical record. Inventory materialized at commit time is
/// independent and unaffected.
#[async_trait]
pub trait DeletePurchaseOrderUseCase: Send + Sync {
    async fn execute(&self, order_id: i64) -> Result<(), PurchaseError>;
}
