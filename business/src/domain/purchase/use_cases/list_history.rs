use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::model::PurchaseOrder;

/// Lists Purchased orders with item details loaded lazily per order. A
/// failed detail fetch degrades that one record to an empty item list
/// instead of failing the whole listing.
#[async_trait]
pub trait ListPurchaseHistoryUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<PurchaseOrder>, PurchaseError>;
}
