use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;

/// "Buy this again": resolves a historical order's ingredient ids and adds
/// them to the current Draft cart. Returns the number of items forwarded.
#[async_trait]
pub trait ReorderUseCase: Send + Sync {
    async fn execute(&self, order_id: i64) -> Result<usize, PurchaseError>;
}
