use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::cache::CatalogCache;
use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::model::InventoryDraft;
use crate::domain::inventory::store::InventoryStore;
use crate::domain::inventory::use_cases::add_entry::{
    AddInventoryEntryParams, AddInventoryEntryUseCase,
};
use crate::domain::logger::Logger;

pub struct AddInventoryEntryUseCaseImpl {
    pub gateway: Arc<dyn InventoryGateway>,
    pub catalog: Arc<CatalogCache>,
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddInventoryEntryUseCase for AddInventoryEntryUseCaseImpl {
    async fn execute(&self, params: AddInventoryEntryParams) -> Result<(), InventoryError> {
        let ingredient = self
            .catalog
            .ingredient(params.ingredient_id)
            .ok_or(InventoryError::UnknownIngredient)?;

        let draft = InventoryDraft::new(
            &ingredient,
            params.production_date,
            params.storage_override,
        )?;
        self.logger.info(&format!(
            "Stocking {} (expires {})",
            ingredient.name, draft.expiry_date
        ));

        self.gateway.add(&draft).await?;
        let entries = self.gateway.list().await?;
        self.store.replace(entries);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_logger, MockInventoryGw};
    use crate::domain::ingredient::model::{Ingredient, IngredientCategory, StorageType};
    use chrono::NaiveDate;

    fn catalog_with_shelf_life(id: i64, shelf_life_days: i64) -> Arc<CatalogCache> {
        let catalog = Arc::new(CatalogCache::new());
        catalog.replace_ingredients(vec![Ingredient::from_gateway(
            id,
            "Chicken".to_string(),
            IngredientCategory::Meat,
            shelf_life_days,
            StorageType::Refrigerated,
            None,
        )]);
        catalog
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn should_send_derived_expiry_date() {
        let mut gateway = MockInventoryGw::new();
        gateway
            .expect_add()
            .withf(|draft| {
                draft.ingredient_id == 5
                    && draft.production_date == date(2024, 1, 1)
                    && draft.expiry_date == date(2024, 1, 8)
            })
            .once()
            .returning(|_| Ok(()));
        gateway.expect_list().returning(|| Ok(Vec::new()));

        let use_case = AddInventoryEntryUseCaseImpl {
            gateway: Arc::new(gateway),
            catalog: catalog_with_shelf_life(5, 7),
            store: Arc::new(InventoryStore::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddInventoryEntryParams {
                ingredient_id: 5,
                production_date: date(2024, 1, 1),
                storage_override: None,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_unknown_ingredient_before_any_network_call() {
        let use_case = AddInventoryEntryUseCaseImpl {
            gateway: Arc::new(MockInventoryGw::new()),
            catalog: Arc::new(CatalogCache::new()),
            store: Arc::new(InventoryStore::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddInventoryEntryParams {
                ingredient_id: 42,
                production_date: date(2024, 1, 1),
                storage_override: None,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            InventoryError::UnknownIngredient
        ));
    }

    #[tokio::test]
    async fn should_forward_storage_override() {
        let mut gateway = MockInventoryGw::new();
        gateway
            .expect_add()
            .withf(|draft| draft.storage_type == StorageType::Frozen)
            .once()
            .returning(|_| Ok(()));
        gateway.expect_list().returning(|| Ok(Vec::new()));

        let use_case = AddInventoryEntryUseCaseImpl {
            gateway: Arc::new(gateway),
            catalog: catalog_with_shelf_life(5, 7),
            store: Arc::new(InventoryStore::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddInventoryEntryParams {
                ingredient_id: 5,
                production_date: date(2024, 1, 1),
                storage_override: Some(StorageType::Frozen),
            })
            .await;

        assert!(result.is_ok());
    }
}
