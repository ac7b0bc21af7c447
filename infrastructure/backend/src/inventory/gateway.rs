use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::inventory::gateway::InventoryGateway;
use business::domain::inventory::model::{InventoryDraft, InventoryEntry};

use super::entity::{InventoryAddPayload, InventoryEntity, InventoryUpdatePayload};
use crate::client::BackendClient;

pub struct InventoryGatewayHttp {
    client: BackendClient,
}

impl InventoryGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn into_domain_list(
        entities: Vec<InventoryEntity>,
    ) -> Result<Vec<InventoryEntry>, GatewayError> {
        entities
            .into_iter()
            .map(InventoryEntity::into_domain)
            .collect()
    }
}

#[async_trait]
impl InventoryGateway for InventoryGatewayHttp {
    async fn list(&self) -> Result<Vec<InventoryEntry>, GatewayError> {
        let entities: Vec<InventoryEntity> = self
            .client
            .get("/api/inventory/list")
            .await?
            .unwrap_or_default();
        Self::into_domain_list(entities)
    }

    async fn add(&self, draft: &InventoryDraft) -> Result<(), GatewayError> {
        self.client
            .post_json("/api/inventory/add", &InventoryAddPayload::from_domain(draft))
            .await
    }

    async fn update(&self, entry: &InventoryEntry) -> Result<(), GatewayError> {
        self.client
            .put_json(
                "/api/inventory/update",
                &InventoryUpdatePayload::from_domain(entry),
            )
            .await
    }

    async fn remove(&self, id: i64) -> Result<(), GatewayError> {
        self.client.delete(&format!("/api/inventory/{}", id)).await
    }

    async fn consume(&self, ingredient_id: i64) -> Result<(), GatewayError> {
        self.client
            .delete(&format!("/api/inventory/consume/{}", ingredient_id))
            .await
    }
}
