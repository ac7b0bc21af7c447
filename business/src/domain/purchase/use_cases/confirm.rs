use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;

pub struct ConfirmPurchaseParams {
    pub total_cost: f64,
    pub remark: Option<String>,
}

/// The purchase commit: validate a non-empty list, fetch the cart fresh,
/// confirm, then reload every affected collection. Atomicity lives in the
/// backend transaction; the client's contribution is ordering, so no local
/// state moves before the backend has confirmed.
#[async_trait]
pub trait ConfirmPurchaseUseCase: Send + Sync {
    async fn execute(&self, params: ConfirmPurchaseParams) -> Result<(), PurchaseError>;
}
