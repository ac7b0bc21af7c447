use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;
use crate::domain::shared::batch::BatchOutcome;

/// N independent concurrent removals joined with wait-for-all; not atomic.
/// A complete batch returns the outcome; any per-item failure turns the
/// aggregate into `PurchaseError::BatchIncomplete` carrying the same
/// outcome, and the caller must re-fetch the authoritative cart.
#[async_trait]
pub trait BatchRemoveFromCartUseCase: Send + Sync {
    async fn execute(&self, ingredient_ids: Vec<i64>) -> Result<BatchOutcome, PurchaseError>;
}
