//! Shared mockall doubles for use-case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use crate::domain::errors::GatewayError;
use crate::domain::ingredient::gateway::IngredientGateway;
use crate::domain::ingredient::model::{Ingredient, IngredientDraft};
use crate::domain::inventory::gateway::InventoryGateway;
use crate::domain::inventory::model::{InventoryDraft, InventoryEntry};
use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::{ConfirmParams, PurchaseGateway};
use crate::domain::purchase::model::{PurchaseOrder, PurchaseStatus};
use crate::domain::purchase::shopping_list::ShoppingList;
use crate::domain::purchase::use_cases::add_to_cart::AddToCartUseCase;
use crate::domain::purchase::use_cases::refresh_shopping_list::RefreshShoppingListUseCase;
use crate::domain::recipe::gateway::RecipeGateway;
use crate::domain::recipe::model::{Recipe, RecipeCheck};

mock! {
    pub PurchaseGw {}

    #[async_trait]
    impl PurchaseGateway for PurchaseGw {
        async fn add_to_cart(&self, ingredient_ids: &[i64]) -> Result<(), GatewayError>;
        async fn cart(&self) -> Result<Option<PurchaseOrder>, GatewayError>;
        async fn remove_from_cart(&self, ingredient_id: i64) -> Result<(), GatewayError>;
        async fn confirm(&self, params: &ConfirmParams) -> Result<(), GatewayError>;
        async fn orders(&self, status: Option<PurchaseStatus>) -> Result<Vec<PurchaseOrder>, GatewayError>;
        async fn order_detail(&self, id: i64) -> Result<PurchaseOrder, GatewayError>;
        async fn delete_order(&self, id: i64) -> Result<(), GatewayError>;
    }
}

mock! {
    pub IngredientGw {}

    #[async_trait]
    impl IngredientGateway for IngredientGw {
        async fn list(&self) -> Result<Vec<Ingredient>, GatewayError>;
        async fn create(&self, draft: &IngredientDraft) -> Result<(), GatewayError>;
        async fn update(&self, id: i64, draft: &IngredientDraft) -> Result<(), GatewayError>;
        async fn delete(&self, id: i64) -> Result<(), GatewayError>;
        async fn delete_batch(&self, ids: &[i64]) -> Result<(), GatewayError>;
    }
}

mock! {
    pub RecipeGw {}

    #[async_trait]
    impl RecipeGateway for RecipeGw {
        async fn list(&self) -> Result<Vec<Recipe>, GatewayError>;
        async fn detail(&self, id: i64) -> Result<Recipe, GatewayError>;
        async fn check(&self, id: i64) -> Result<RecipeCheck, GatewayError>;
        async fn delete(&self, id: i64) -> Result<(), GatewayError>;
    }
}

mock! {
    pub InventoryGw {}

    #[async_trait]
    impl InventoryGateway for InventoryGw {
        async fn list(&self) -> Result<Vec<InventoryEntry>, GatewayError>;
        async fn add(&self, draft: &InventoryDraft) -> Result<(), GatewayError>;
        async fn update(&self, entry: &InventoryEntry) -> Result<(), GatewayError>;
        async fn remove(&self, id: i64) -> Result<(), GatewayError>;
        async fn consume(&self, ingredient_id: i64) -> Result<(), GatewayError>;
    }
}

mock! {
    pub AddToCart {}

    #[async_trait]
    impl AddToCartUseCase for AddToCart {
        async fn execute(&self, ingredient_ids: Vec<i64>) -> Result<(), PurchaseError>;
    }
}

mock! {
    pub RefreshList {}

    #[async_trait]
    impl RefreshShoppingListUseCase for RefreshList {
        async fn execute(&self) -> Result<ShoppingList, PurchaseError>;
    }
}

mock! {
    pub RefreshCatalog {}

    #[async_trait]
    impl RefreshCatalogUseCase for RefreshCatalog {
        async fn execute(&self) -> Result<(), GatewayError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}
