use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;

/// Adds the full id set to the Draft cart in one request. An empty set is a
/// no-op success; the backend dedups against lines already present. The
/// local view is only updated by a subsequent refresh.
#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, ingredient_ids: Vec<i64>) -> Result<(), PurchaseError>;
}
