use async_trait::async_trait;

use crate::domain::errors::GatewayError;

use super::model::{PurchaseOrder, PurchaseStatus};

/// Parameters for the atomic commit. The backend marks the order Purchased
/// and materializes inventory rows in one transaction; the client sends no
/// dates on this path.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmParams {
    pub order_id: i64,
    pub total_cost: f64,
    pub remark: Option<String>,
}

#[async_trait]
pub trait PurchaseGateway: Send + Sync {
    /// One request with the full id set; the backend dedups against the
    /// current Draft order.
    async fn add_to_cart(&self, ingredient_ids: &[i64]) -> Result<(), GatewayError>;
    /// `None` when no Draft order exists.
    async fn cart(&self) -> Result<Option<PurchaseOrder>, GatewayError>;
    /// Removal is keyed by ingredient id: the dedup invariant guarantees at
    /// most one matching line.
    async fn remove_from_cart(&self, ingredient_id: i64) -> Result<(), GatewayError>;
    async fn confirm(&self, params: &ConfirmParams) -> Result<(), GatewayError>;
    async fn orders(&self, status: Option<PurchaseStatus>)
        -> Result<Vec<PurchaseOrder>, GatewayError>;
    async fn order_detail(&self, id: i64) -> Result<PurchaseOrder, GatewayError>;
    async fn delete_order(&self, id: i64) -> Result<(), GatewayError>;
}
