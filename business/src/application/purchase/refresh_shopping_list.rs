use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::cache::CatalogCache;
use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::shopping_list::{ShoppingList, ShoppingListStore};
use crate::domain::purchase::use_cases::refresh_shopping_list::RefreshShoppingListUseCase;
use crate::domain::recipe::selection::RecipeSelection;

pub struct RefreshShoppingListUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub catalog: Arc<CatalogCache>,
    pub selection: Arc<RecipeSelection>,
    pub store: Arc<ShoppingListStore>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RefreshShoppingListUseCase for RefreshShoppingListUseCaseImpl {
    async fn execute(&self) -> Result<ShoppingList, PurchaseError> {
        let cart = self.gateway.cart().await?;
        let items = cart.map(|order| order.items).unwrap_or_default();

        let list = ShoppingList::project(&items, &self.catalog, &self.selection.snapshot());
        self.logger.debug(&format!(
            "Shopping list refreshed: {} entries from {} cart lines",
            list.len(),
            items.len()
        ));

        self.store.replace(list.clone());
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_logger, MockPurchaseGw};
    use crate::domain::errors::GatewayError;
    use crate::domain::ingredient::model::{Ingredient, IngredientCategory, StorageType};
    use crate::domain::purchase::model::{PurchaseOrder, PurchaseOrderItem, PurchaseStatus};

    fn ingredient(id: i64, name: &str) -> Ingredient {
        Ingredient::from_gateway(
            id,
            name.to_string(),
            IngredientCategory::Vegetable,
            5,
            StorageType::Refrigerated,
            None,
        )
    }

    fn cart_with(ids: &[i64]) -> PurchaseOrder {
        PurchaseOrder::from_gateway(
            1,
            PurchaseStatus::Draft,
            ids.iter()
                .map(|id| PurchaseOrderItem {
                    ingredient_id: *id,
                    ingredient_name: format!("ingredient-{}", id),
                })
                .collect(),
            0.0,
            None,
            None,
            None,
        )
    }

    fn use_case_with(
        gateway: MockPurchaseGw,
        catalog: Arc<CatalogCache>,
        store: Arc<ShoppingListStore>,
    ) -> RefreshShoppingListUseCaseImpl {
        RefreshShoppingListUseCaseImpl {
            gateway: Arc::new(gateway),
            catalog,
            selection: Arc::new(RecipeSelection::new()),
            store,
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_project_cart_into_store() {
        let mut gateway = MockPurchaseGw::new();
        gateway
            .expect_cart()
            .returning(|| Ok(Some(cart_with(&[1, 2]))));

        let catalog = Arc::new(CatalogCache::new());
        catalog.replace_ingredients(vec![ingredient(1, "Tomato"), ingredient(2, "Leek")]);
        let store = Arc::new(ShoppingListStore::new());

        let use_case = use_case_with(gateway, catalog, store.clone());
        let list = use_case.execute().await.unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(store.len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_view_when_no_draft_cart() {
        let mut gateway = MockPurchaseGw::new();
        gateway.expect_cart().returning(|| Ok(None));

        let store = Arc::new(ShoppingListStore::new());
        let use_case = use_case_with(gateway, Arc::new(CatalogCache::new()), store.clone());

        let list = use_case.execute().await.unwrap();

        assert!(list.is_empty());
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn should_drop_unresolvable_cart_lines() {
        let mut gateway = MockPurchaseGw::new();
        gateway
            .expect_cart()
            .returning(|| Ok(Some(cart_with(&[1, 99]))));

        let catalog = Arc::new(CatalogCache::new());
        catalog.replace_ingredients(vec![ingredient(1, "Tomato")]);
        let store = Arc::new(ShoppingListStore::new());

        let use_case = use_case_with(gateway, catalog, store.clone());
        let list = use_case.execute().await.unwrap();

        assert_eq!(list.len(), 1);
        assert!(!list.contains(99));
    }

    #[tokio::test]
    async fn should_leave_store_untouched_when_cart_fetch_fails() {
        let catalog = Arc::new(CatalogCache::new());
        catalog.replace_ingredients(vec![ingredient(1, "Tomato")]);
        let store = Arc::new(ShoppingListStore::new());
        store.replace(ShoppingList::project(
            &[PurchaseOrderItem {
                ingredient_id: 1,
                ingredient_name: "Tomato".to_string(),
            }],
            &catalog,
            &[],
        ));

        let mut gateway = MockPurchaseGw::new();
        gateway
            .expect_cart()
            .returning(|| Err(GatewayError::Network));

        let use_case = use_case_with(gateway, catalog, store.clone());
        let result = use_case.execute().await;

        assert!(result.is_err());
        assert_eq!(store.len(), 1);
        assert!(store.current().contains(1));
    }
}
