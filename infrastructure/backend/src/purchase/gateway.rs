use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::purchase::gateway::{ConfirmParams, PurchaseGateway};
use business::domain::purchase::model::{PurchaseOrder, PurchaseStatus};

use super::entity::PurchaseOrderEntity;
use crate::client::BackendClient;

pub struct PurchaseGatewayHttp {
    client: BackendClient,
}

impl PurchaseGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PurchaseGateway for PurchaseGatewayHttp {
    async fn add_to_cart(&self, ingredient_ids: &[i64]) -> Result<(), GatewayError> {
        self.client
            .post_json("/api/purchase/cart/add", ingredient_ids)
            .await
    }

    async fn cart(&self) -> Result<Option<PurchaseOrder>, GatewayError> {
        let entity: Option<PurchaseOrderEntity> = self.client.get("/api/purchase/cart").await?;
        entity.map(PurchaseOrderEntity::into_domain).transpose()
    }

    async fn remove_from_cart(&self, ingredient_id: i64) -> Result<(), GatewayError> {
        self.client
            .delete(&format!("/api/purchase/cart/item/{}", ingredient_id))
            .await
    }

    async fn confirm(&self, params: &ConfirmParams) -> Result<(), GatewayError> {
        // Arguments travel as query parameters on an empty-bodied POST.
        let mut query: Vec<(&str, String)> = vec![
            ("orderId", params.order_id.to_string()),
            ("totalCost", params.total_cost.to_string()),
        ];
        if let Some(remark) = &params.remark {
            query.push(("remark", remark.clone()));
        }
        self.client
            .post_with_query("/api/purchase/cart/confirm", &query)
            .await
    }

    async fn orders(
        &self,
        status: Option<PurchaseStatus>,
    ) -> Result<Vec<PurchaseOrder>, GatewayError> {
        let entities: Vec<PurchaseOrderEntity> = match status {
            Some(status) => {
                self.client
                    .get_with_query("/api/purchase/orders", &[("status", status.code())])
                    .await?
            }
            None => self.client.get("/api/purchase/orders").await?,
        }
        .unwrap_or_default();

        entities
            .into_iter()
            .map(PurchaseOrderEntity::into_domain)
            .collect()
    }

    async fn order_detail(&self, id: i64) -> Result<PurchaseOrder, GatewayError> {
        let entity: PurchaseOrderEntity = self
            .client
            .get(&format!("/api/purchase/orders/{}", id))
            .await?
            .ok_or(GatewayError::Decode)?;
        entity.into_domain()
    }

    async fn delete_order(&self, id: i64) -> Result<(), GatewayError> {
        self.client
            .delete(&format!("/api/purchase/orders/{}", id))
            .await
    }
}
