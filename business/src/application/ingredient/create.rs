use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::gateway::IngredientGateway;
use crate::domain::ingredient::model::IngredientDraft;
use crate::domain::ingredient::use_cases::create::{
    CreateIngredientParams, CreateIngredientUseCase,
};
use crate::domain::logger::Logger;

pub struct CreateIngredientUseCaseImpl {
    pub gateway: Arc<dyn IngredientGateway>,
    pub refresh_catalog: Arc<dyn RefreshCatalogUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateIngredientUseCase for CreateIngredientUseCaseImpl {
    async fn execute(&self, params: CreateIngredientParams) -> Result<(), IngredientError> {
        let draft = IngredientDraft::new(
            params.name,
            params.category,
            params.shelf_life_days,
            params.storage_type,
            params.image_url,
        )?;

        self.logger
            .info(&format!("Creating ingredient: {}", draft.name));
        self.gateway.create(&draft).await?;
        self.refresh_catalog.execute().await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_logger, MockIngredientGw, MockRefreshCatalog};
    use crate::domain::ingredient::model::{IngredientCategory, StorageType};

    fn params(name: &str, shelf_life_days: i64) -> CreateIngredientParams {
        CreateIngredientParams {
            name: name.to_string(),
            category: IngredientCategory::Fruit,
            shelf_life_days,
            storage_type: StorageType::RoomTemp,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn should_create_and_rebuild_cache() {
        let mut gateway = MockIngredientGw::new();
        gateway.expect_create().once().returning(|_| Ok(()));
        let mut refresh = MockRefreshCatalog::new();
        refresh.expect_execute().once().returning(|| Ok(()));

        let use_case = CreateIngredientUseCaseImpl {
            gateway: Arc::new(gateway),
            refresh_catalog: Arc::new(refresh),
            logger: mock_logger(),
        };

        assert!(use_case.execute(params("Mango", 5)).await.is_ok());
    }

    #[tokio::test]
    async fn should_reject_empty_name_before_any_network_call() {
        let use_case = CreateIngredientUseCaseImpl {
            gateway: Arc::new(MockIngredientGw::new()),
            refresh_catalog: Arc::new(MockRefreshCatalog::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("  ", 5)).await;

        assert!(matches!(result.unwrap_err(), IngredientError::NameEmpty));
    }

    #[tokio::test]
    async fn should_reject_non_positive_shelf_life() {
        let use_case = CreateIngredientUseCaseImpl {
            gateway: Arc::new(MockIngredientGw::new()),
            refresh_catalog: Arc::new(MockRefreshCatalog::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("Mango", -1)).await;

        assert!(matches!(
            result.unwrap_err(),
            IngredientError::ShelfLifeNotPositive
        ));
    }
}
