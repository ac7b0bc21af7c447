use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::ingredient::gateway::IngredientGateway;
use business::domain::ingredient::model::{Ingredient, IngredientDraft};

use super::entity::{IngredientEntity, IngredientPayload};
use crate::client::BackendClient;

pub struct IngredientGatewayHttp {
    client: BackendClient,
}

impl IngredientGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }

    fn into_domain_list(entities: Vec<IngredientEntity>) -> Result<Vec<Ingredient>, GatewayError> {
        entities
            .into_iter()
            .map(IngredientEntity::into_domain)
            .collect()
    }
}

#[async_trait]
impl IngredientGateway for IngredientGatewayHttp {
    async fn list(&self) -> Result<Vec<Ingredient>, GatewayError> {
        let entities: Vec<IngredientEntity> = self
            .client
            .get("/api/ingredients")
            .await?
            .unwrap_or_default();
        Self::into_domain_list(entities)
    }

    async fn create(&self, draft: &IngredientDraft) -> Result<(), GatewayError> {
        self.client
            .post_json("/api/ingredients", &IngredientPayload::from_domain(draft))
            .await
    }

    async fn update(&self, id: i64, draft: &IngredientDraft) -> Result<(), GatewayError> {
        self.client
            .put_json(
                &format!("/api/ingredients/{}", id),
                &IngredientPayload::from_domain(draft),
            )
            .await
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        self.client.delete(&format!("/api/ingredients/{}", id)).await
    }

    async fn delete_batch(&self, ids: &[i64]) -> Result<(), GatewayError> {
        let joined = ids
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.client
            .delete_with_query("/api/ingredients", &[("ids", joined)])
            .await
    }
}
