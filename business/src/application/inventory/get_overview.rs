use std::sync::Arc;

use async_trait::async_trait;
use chrono::Local;

use crate::domain::catalog::cache::CatalogCache;
use crate::domain::inventory::errors::InventoryError;
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::model::StockedIngredient;
use crate::domain::inventory::store::InventoryStore;
use crate::domain::inventory::use_cases::get_overview::GetInventoryOverviewUseCase;
use crate::domain::logger::Logger;

pub struct GetInventoryOverviewUseCaseImpl {
    pub gateway: Arc<dyn InventoryGateway>,
    pub catalog: Arc<CatalogCache>,
    pub store: Arc<InventoryStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetInventoryOverviewUseCase for GetInventoryOverviewUseCaseImpl {
    async fn execute(&self) -> Result<Vec<StockedIngredient>, InventoryError> {
        let entries = self.gateway.list().await?;
        self.store.replace(entries.clone());

        let today = Local::now().date_naive();
        let rows: Vec<StockedIngredient> = entries
            .into_iter()
            .filter_map(|entry| {
                self.catalog
                    .ingredient(entry.ingredient_id)
                    .map(|ingredient| StockedIngredient::project(entry, ingredient, today))
            })
            .collect();

        self.logger
            .debug(&format!("Inventory overview: {} rows", rows.len()));
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_logger, MockInventoryGw};
    use crate::domain::ingredient::model::{Ingredient, IngredientCategory, StorageType};
    use crate::domain::inventory::model::InventoryEntry;
    use chrono::{NaiveDate, Utc};

    fn ingredient(id: i64) -> Ingredient {
        Ingredient::from_gateway(
            id,
            format!("ingredient-{}", id),
            IngredientCategory::Vegetable,
            5,
            StorageType::Refrigerated,
            None,
        )
    }

    fn entry(id: i64, ingredient_id: i64) -> InventoryEntry {
        let production = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        InventoryEntry::from_gateway(
            id,
            ingredient_id,
            production,
            production + chrono::Duration::days(5),
            StorageType::Refrigerated,
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_join_entries_with_catalog_and_fill_store() {
        let mut gateway = MockInventoryGw::new();
        gateway
            .expect_list()
            .returning(|| Ok(vec![entry(1, 10), entry(2, 11)]));

        let catalog = Arc::new(CatalogCache::new());
        catalog.replace_ingredients(vec![ingredient(10), ingredient(11)]);
        let store = Arc::new(InventoryStore::new());

        let use_case = GetInventoryOverviewUseCaseImpl {
            gateway: Arc::new(gateway),
            catalog,
            store: store.clone(),
            logger: mock_logger(),
        };

        let rows = use_case.execute().await.unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn should_drop_rows_with_stale_ingredient_reference() {
        let mut gateway = MockInventoryGw::new();
        gateway
            .expect_list()
            .returning(|| Ok(vec![entry(1, 10), entry(2, 99)]));

        let catalog = Arc::new(CatalogCache::new());
        catalog.replace_ingredients(vec![ingredient(10)]);

        let use_case = GetInventoryOverviewUseCaseImpl {
            gateway: Arc::new(gateway),
            catalog,
            store: Arc::new(InventoryStore::new()),
            logger: mock_logger(),
        };

        let rows = use_case.execute().await.unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].ingredient.id, 10);
    }
}
