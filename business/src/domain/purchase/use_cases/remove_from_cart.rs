use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;

/// Removes one cart line, keyed by ingredient id (unambiguous under the
/// dedup invariant).
#[async_trait]
pub trait RemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, ingredient_id: i64) -> Result<(), PurchaseError>;
}
