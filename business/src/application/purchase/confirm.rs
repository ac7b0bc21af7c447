use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::cache::CatalogCache;
use crate::domain::ingredient::gateway::IngredientGateway;
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::store::InventoryStore;
use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::{ConfirmParams, PurchaseGateway};
use crate::domain::purchase::shopping_list::ShoppingListStore;
use crate::domain::purchase::use_cases::confirm::{ConfirmPurchaseParams, ConfirmPurchaseUseCase};
use crate::domain::purchase::use_cases::refresh_shopping_list::RefreshShoppingListUseCase;
use crate::domain::recipe::gateway::RecipeGateway;
use crate::domain::recipe::selection::RecipeSelection;

/// Orchestrates the commit. The backend transaction does the real work
/// (order flips to Purchased, inventory rows materialize with server-derived
/// expiry dates); the client guarantees ordering only: nothing local moves
/// until the backend has confirmed, and afterwards every affected collection
/// is reloaded in full.
pub struct ConfirmPurchaseUseCaseImpl {
    pub purchase_gateway: Arc<dyn PurchaseGateway>,
    pub ingredient_gateway: Arc<dyn IngredientGateway>,
    pub recipe_gateway: Arc<dyn RecipeGateway>,
    pub inventory_gateway: Arc<dyn InventoryGateway>,
    pub catalog: Arc<CatalogCache>,
    pub inventory: Arc<InventoryStore>,
    pub selection: Arc<RecipeSelection>,
    pub shopping_list: Arc<ShoppingListStore>,
    pub refresh_shopping_list: Arc<dyn RefreshShoppingListUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ConfirmPurchaseUseCase for ConfirmPurchaseUseCaseImpl {
    async fn execute(&self, params: ConfirmPurchaseParams) -> Result<(), PurchaseError> {
        let planned = self.shopping_list.len();
        if planned == 0 {
            return Err(PurchaseError::EmptyCart);
        }

        // Fetch the cart fresh; a cached order id could be stale if the cart
        // was emptied between render and click.
        let cart = self
            .purchase_gateway
            .cart()
            .await?
            .ok_or(PurchaseError::EmptyCart)?;

        let remark = params
            .remark
            .unwrap_or_else(|| format!("Restocked {} ingredients", planned));
        self.logger
            .info(&format!("Confirming purchase of order {}", cart.id));
        self.purchase_gateway
            .confirm(&ConfirmParams {
                order_id: cart.id,
                total_cost: params.total_cost,
                remark: Some(remark),
            })
            .await?;

        // Committed server-side; reload everything the commit touched.
        let ingredients = self.ingredient_gateway.list().await?;
        self.catalog.replace_ingredients(ingredients);
        let recipes = self.recipe_gateway.list().await?;
        self.catalog.replace_recipes(recipes);
        let stock = self.inventory_gateway.list().await?;
        self.inventory.replace(stock);

        self.selection.clear();
        self.refresh_shopping_list.execute().await?;

        self.logger
            .info(&format!("Purchase confirmed, order {} archived", cart.id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{
        mock_logger, MockIngredientGw, MockInventoryGw, MockPurchaseGw, MockRecipeGw,
        MockRefreshList,
    };
    use crate::domain::errors::GatewayError;
    use crate::domain::ingredient::model::{Ingredient, IngredientCategory, StorageType};
    use crate::domain::purchase::model::{PurchaseOrder, PurchaseOrderItem, PurchaseStatus};
    use crate::domain::purchase::shopping_list::ShoppingList;

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

    fn draft_cart() -> PurchaseOrder {
        PurchaseOrder::from_gateway(
            31,
            PurchaseStatus::Draft,
            vec![PurchaseOrderItem {
                ingredient_id: 1,
                ingredient_name: "Tomato".to_string(),
            }],
            0.0,
            None,
            None,
            None,
        )
    }

    struct Fixture {
        purchase: MockPurchaseGw,
        ingredients: MockIngredientGw,
        recipes: MockRecipeGw,
        inventory: MockInventoryGw,
        refresh: MockRefreshList,
        catalog: Arc<CatalogCache>,
        stock: Arc<InventoryStore>,
        selection: Arc<RecipeSelection>,
        shopping_list: Arc<ShoppingListStore>,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                purchase: MockPurchaseGw::new(),
                ingredients: MockIngredientGw::new(),
                recipes: MockRecipeGw::new(),
                inventory: MockInventoryGw::new(),
                refresh: MockRefreshList::new(),
                catalog: Arc::new(CatalogCache::new()),
                stock: Arc::new(InventoryStore::new()),
                selection: Arc::new(RecipeSelection::new()),
                shopping_list: Arc::new(ShoppingListStore::new()),
            }
        }

        fn with_pending_list(self) -> Self {
            self.catalog
                .replace_ingredients(vec![ingredient(1, "Tomato")]);
            self.shopping_list.replace(ShoppingList::project(
                &[PurchaseOrderItem {
                    ingredient_id: 1,
                    ingredient_name: "Tomato".to_string(),
                }],
                &self.catalog,
                &[],
            ));
            self
        }

        fn build(self) -> ConfirmPurchaseUseCaseImpl {
            ConfirmPurchaseUseCaseImpl {
                purchase_gateway: Arc::new(self.purchase),
                ingredient_gateway: Arc::new(self.ingredients),
                recipe_gateway: Arc::new(self.recipes),
                inventory_gateway: Arc::new(self.inventory),
                catalog: self.catalog,
                inventory: self.stock,
                selection: self.selection,
                shopping_list: self.shopping_list,
                refresh_shopping_list: Arc::new(self.refresh),
                logger: mock_logger(),
            }
        }
    }

    #[tokio::test]
    async fn should_fail_fast_without_network_when_list_empty() {
        // No gateway expectations: any call would panic the mocks.
        let use_case = Fixture::new().build();

        let result = use_case
            .execute(ConfirmPurchaseParams {
                total_cost: 0.0,
                remark: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), PurchaseError::EmptyCart));
    }

    #[tokio::test]
    async fn should_fail_when_draft_cart_vanished() {
        let mut fixture = Fixture::new().with_pending_list();
        fixture.purchase.expect_cart().returning(|| Ok(None));

        let use_case = fixture.build();
        let result = use_case
            .execute(ConfirmPurchaseParams {
                total_cost: 0.0,
                remark: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), PurchaseError::EmptyCart));
    }

    #[tokio::test]
    async fn should_leave_view_and_selection_untouched_when_confirm_fails() {
        let mut fixture = Fixture::new().with_pending_list();
        fixture.selection.select(9);
        fixture
            .purchase
            .expect_cart()
            .returning(|| Ok(Some(draft_cart())));
        fixture
            .purchase
            .expect_confirm()
            .returning(|_| Err(GatewayError::backend("insufficient funds")));

        let selection = fixture.selection.clone();
        let shopping_list = fixture.shopping_list.clone();
        let before = shopping_list.current();

        let use_case = fixture.build();
        let result = use_case
            .execute(ConfirmPurchaseParams {
                total_cost: 12.5,
                remark: None,
            })
            .await;

        assert!(result.is_err());
        assert_eq!(shopping_list.current(), before);
        assert!(selection.contains(9));
    }

    #[tokio::test]
    async fn should_reload_collections_and_clear_selection_on_success() {
        let mut fixture = Fixture::new().with_pending_list();
        fixture.selection.select(9);
        fixture
            .purchase
            .expect_cart()
            .returning(|| Ok(Some(draft_cart())));
        fixture
            .purchase
            .expect_confirm()
            .withf(|params| params.order_id == 31 && params.remark.is_some())
            .once()
            .returning(|_| Ok(()));
        fixture
            .ingredients
            .expect_list()
            .once()
            .returning(|| Ok(vec![ingredient(1, "Tomato")]));
        fixture
            .recipes
            .expect_list()
            .once()
            .returning(|| Ok(Vec::new()));
        fixture
            .inventory
            .expect_list()
            .once()
            .returning(|| Ok(Vec::new()));
        fixture
            .refresh
            .expect_execute()
            .once()
            .returning(|| Ok(ShoppingList::default()));

        let selection = fixture.selection.clone();

        let use_case = fixture.build();
        let result = use_case
            .execute(ConfirmPurchaseParams {
                total_cost: 12.5,
                remark: Some("weekly shop".to_string()),
            })
            .await;

        assert!(result.is_ok());
        assert!(!selection.contains(9));
    }
}
