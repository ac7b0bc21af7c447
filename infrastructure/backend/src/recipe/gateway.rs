use async_trait::async_trait;

use business::domain::errors::GatewayError;
use business::domain::recipe::gateway::RecipeGateway;
use business::domain::recipe::model::{Recipe, RecipeCheck};

use super::entity::{RecipeCheckEntity, RecipeEntity};
use crate::client::BackendClient;

pub struct RecipeGatewayHttp {
    client: BackendClient,
}

impl RecipeGatewayHttp {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecipeGateway for RecipeGatewayHttp {
    async fn list(&self) -> Result<Vec<Recipe>, GatewayError> {
        let entities: Vec<RecipeEntity> = self
            .client
            .get("/api/recipes/list")
            .await?
            .unwrap_or_default();
        entities.into_iter().map(RecipeEntity::into_domain).collect()
    }

    async fn detail(&self, id: i64) -> Result<Recipe, GatewayError> {
        let entity: RecipeEntity = self
            .client
            .get(&format!("/api/recipes/{}", id))
            .await?
            .ok_or(GatewayError::Decode)?;
        entity.into_domain()
    }

    async fn check(&self, id: i64) -> Result<RecipeCheck, GatewayError> {
        let entity: RecipeCheckEntity = self
            .client
            .get(&format!("/api/recipes/{}/check", id))
            .await?
            .ok_or(GatewayError::Decode)?;
        entity.into_domain()
    }

    async fn delete(&self, id: i64) -> Result<(), GatewayError> {
        self.client.delete(&format!("/api/recipes/{}", id)).await
    }
}
