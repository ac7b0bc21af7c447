use std::sync::Arc;

use logger::TracingLogger;

use backend::client::BackendClient;
use backend::ingredient::gateway::IngredientGatewayHttp;
use backend::inventory::gateway::InventoryGatewayHttp;
use backend::purchase::gateway::PurchaseGatewayHttp;
use backend::recipe::gateway::RecipeGatewayHttp;

use business::application::catalog::refresh::RefreshCatalogUseCaseImpl;
use business::application::ingredient::batch_delete::BatchDeleteIngredientsUseCaseImpl;
use business::application::ingredient::create::CreateIngredientUseCaseImpl;
use business::application::ingredient::delete::DeleteIngredientUseCaseImpl;
use business::application::ingredient::update::UpdateIngredientUseCaseImpl;
use business::application::inventory::add_entry::AddInventoryEntryUseCaseImpl;
use business::application::inventory::batch_remove::BatchRemoveInventoryUseCaseImpl;
use business::application::inventory::consume::ConsumeIngredientUseCaseImpl;
use business::application::inventory::get_overview::GetInventoryOverviewUseCaseImpl;
use business::application::inventory::remove_entry::RemoveInventoryEntryUseCaseImpl;
use business::application::inventory::update_entry::UpdateInventoryEntryUseCaseImpl;
use business::application::purchase::add_recipe_to_cart::AddRecipeToCartUseCaseImpl;
use business::application::purchase::add_to_cart::AddToCartUseCaseImpl;
use business::application::purchase::batch_remove_from_cart::BatchRemoveFromCartUseCaseImpl;
use business::application::purchase::confirm::ConfirmPurchaseUseCaseImpl;
use business::application::purchase::delete_order::DeletePurchaseOrderUseCaseImpl;
use business::application::purchase::list_history::ListPurchaseHistoryUseCaseImpl;
use business::application::purchase::refresh_shopping_list::RefreshShoppingListUseCaseImpl;
use business::application::purchase::remove_from_cart::RemoveFromCartUseCaseImpl;
use business::application::purchase::reorder::ReorderUseCaseImpl;
use business::application::recipe::check::CheckRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;

use business::domain::catalog::cache::CatalogCache;
use business::domain::catalog::use_cases::refresh::RefreshCatalogUseCase;
use business::domain::ingredient::use_cases::batch_delete::BatchDeleteIngredientsUseCase;
use business::domain::ingredient::use_cases::create::CreateIngredientUseCase;
use business::domain::ingredient::use_cases::delete::DeleteIngredientUseCase;
use business::domain::ingredient::use_cases::update::UpdateIngredientUseCase;
use business::domain::inventory::store::InventoryStore;
use business::domain::inventory::use_cases::add_entry::AddInventoryEntryUseCase;
use business::domain::inventory::use_cases::batch_remove::BatchRemoveInventoryUseCase;
use business::domain::inventory::use_cases::consume::ConsumeIngredientUseCase;
use business::domain::inventory::use_cases::get_overview::GetInventoryOverviewUseCase;
use business::domain::inventory::use_cases::remove_entry::RemoveInventoryEntryUseCase;
use business::domain::inventory::use_cases::update_entry::UpdateInventoryEntryUseCase;
use business::domain::purchase::shopping_list::ShoppingListStore;
use business::domain::purchase::use_cases::add_recipe_to_cart::AddRecipeToCartUseCase;
use business::domain::purchase::use_cases::add_to_cart::AddToCartUseCase;
use business::domain::purchase::use_cases::batch_remove_from_cart::BatchRemoveFromCartUseCase;
use business::domain::purchase::use_cases::confirm::ConfirmPurchaseUseCase;
use business::domain::purchase::use_cases::delete_order::DeletePurchaseOrderUseCase;
use business::domain::purchase::use_cases::list_history::ListPurchaseHistoryUseCase;
use business::domain::purchase::use_cases::refresh_shopping_list::RefreshShoppingListUseCase;
use business::domain::purchase::use_cases::remove_from_cart::RemoveFromCartUseCase;
use business::domain::purchase::use_cases::reorder::ReorderUseCase;
use business::domain::recipe::selection::RecipeSelection;
use business::domain::recipe::use_cases::check::CheckRecipeUseCase;
use business::domain::recipe::use_cases::delete::DeleteRecipeUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    pub catalog: Arc<CatalogCache>,
    pub selection: Arc<RecipeSelection>,

    pub refresh_catalog: Arc<dyn RefreshCatalogUseCase>,
    pub create_ingredient: Arc<dyn CreateIngredientUseCase>,
    pub update_ingredient: Arc<dyn UpdateIngredientUseCase>,
    pub delete_ingredient: Arc<dyn DeleteIngredientUseCase>,
    pub batch_delete_ingredients: Arc<dyn BatchDeleteIngredientsUseCase>,

    pub check_recipe: Arc<dyn CheckRecipeUseCase>,
    pub delete_recipe: Arc<dyn DeleteRecipeUseCase>,

    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub add_recipe_to_cart: Arc<dyn AddRecipeToCartUseCase>,
    pub remove_from_cart: Arc<dyn RemoveFromCartUseCase>,
    pub batch_remove_from_cart: Arc<dyn BatchRemoveFromCartUseCase>,
    pub refresh_shopping_list: Arc<dyn RefreshShoppingListUseCase>,
    pub confirm_purchase: Arc<dyn ConfirmPurchaseUseCase>,

    pub list_history: Arc<dyn ListPurchaseHistoryUseCase>,
    pub reorder: Arc<dyn ReorderUseCase>,
    pub delete_order: Arc<dyn DeletePurchaseOrderUseCase>,

    pub inventory_overview: Arc<dyn GetInventoryOverviewUseCase>,
    pub add_inventory: Arc<dyn AddInventoryEntryUseCase>,
    pub update_inventory: Arc<dyn UpdateInventoryEntryUseCase>,
    pub remove_inventory: Arc<dyn RemoveInventoryEntryUseCase>,
    pub consume_ingredient: Arc<dyn ConsumeIngredientUseCase>,
    pub batch_remove_inventory: Arc<dyn BatchRemoveInventoryUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters, one HTTP client per gateway
        let ingredient_gateway = Arc::new(IngredientGatewayHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
            config.backend.timeout,
        )));
        let recipe_gateway = Arc::new(RecipeGatewayHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
            config.backend.timeout,
        )));
        let inventory_gateway = Arc::new(InventoryGatewayHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
            config.backend.timeout,
        )));
        let purchase_gateway = Arc::new(PurchaseGatewayHttp::new(BackendClient::new(
            config.backend.base_url.clone(),
            config.backend.timeout,
        )));

        // Client-side stores
        let catalog = Arc::new(CatalogCache::new());
        let inventory_store = Arc::new(InventoryStore::new());
        let selection = Arc::new(RecipeSelection::new());
        let shopping_list = Arc::new(ShoppingListStore::new());

        // Catalog use cases
        let refresh_catalog = Arc::new(RefreshCatalogUseCaseImpl {
            ingredient_gateway: ingredient_gateway.clone(),
            recipe_gateway: recipe_gateway.clone(),
            catalog: catalog.clone(),
            logger: logger.clone(),
        });
        let create_ingredient = Arc::new(CreateIngredientUseCaseImpl {
            gateway: ingredient_gateway.clone(),
            refresh_catalog: refresh_catalog.clone(),
            logger: logger.clone(),
        });
        let update_ingredient = Arc::new(UpdateIngredientUseCaseImpl {
            gateway: ingredient_gateway.clone(),
            refresh_catalog: refresh_catalog.clone(),
            logger: logger.clone(),
        });
        let delete_ingredient = Arc::new(DeleteIngredientUseCaseImpl {
            gateway: ingredient_gateway.clone(),
            refresh_catalog: refresh_catalog.clone(),
            logger: logger.clone(),
        });
        let batch_delete_ingredients = Arc::new(BatchDeleteIngredientsUseCaseImpl {
            gateway: ingredient_gateway.clone(),
            refresh_catalog: refresh_catalog.clone(),
            logger: logger.clone(),
        });

        // Recipe use cases
        let check_recipe = Arc::new(CheckRecipeUseCaseImpl {
            gateway: recipe_gateway.clone(),
            logger: logger.clone(),
        });
        let delete_recipe = Arc::new(DeleteRecipeUseCaseImpl {
            gateway: recipe_gateway.clone(),
            refresh_catalog: refresh_catalog.clone(),
            logger: logger.clone(),
        });

        // Cart use cases
        let add_to_cart = Arc::new(AddToCartUseCaseImpl {
            gateway: purchase_gateway.clone(),
            logger: logger.clone(),
        });
        let add_recipe_to_cart = Arc::new(AddRecipeToCartUseCaseImpl {
            recipe_gateway: recipe_gateway.clone(),
            add_to_cart: add_to_cart.clone(),
            catalog: catalog.clone(),
            selection: selection.clone(),
            logger: logger.clone(),
        });
        let remove_from_cart = Arc::new(RemoveFromCartUseCaseImpl {
            gateway: purchase_gateway.clone(),
            logger: logger.clone(),
        });
        let batch_remove_from_cart = Arc::new(BatchRemoveFromCartUseCaseImpl {
            gateway: purchase_gateway.clone(),
            logger: logger.clone(),
        });
        let refresh_shopping_list = Arc::new(RefreshShoppingListUseCaseImpl {
            gateway: purchase_gateway.clone(),
            catalog: catalog.clone(),
            selection: selection.clone(),
            store: shopping_list.clone(),
            logger: logger.clone(),
        });
        let confirm_purchase = Arc::new(ConfirmPurchaseUseCaseImpl {
            purchase_gateway: purchase_gateway.clone(),
            ingredient_gateway: ingredient_gateway.clone(),
            recipe_gateway: recipe_gateway.clone(),
            inventory_gateway: inventory_gateway.clone(),
            catalog: catalog.clone(),
            inventory: inventory_store.clone(),
            selection: selection.clone(),
            shopping_list: shopping_list.clone(),
            refresh_shopping_list: refresh_shopping_list.clone(),
            logger: logger.clone(),
        });

        // History use cases
        let list_history = Arc::new(ListPurchaseHistoryUseCaseImpl {
            gateway: purchase_gateway.clone(),
            logger: logger.clone(),
        });
        let reorder = Arc::new(ReorderUseCaseImpl {
            gateway: purchase_gateway.clone(),
            add_to_cart: add_to_cart.clone(),
            refresh_shopping_list: refresh_shopping_list.clone(),
            logger: logger.clone(),
        });
        let delete_order = Arc::new(DeletePurchaseOrderUseCaseImpl {
            gateway: purchase_gateway.clone(),
            logger: logger.clone(),
        });

        // Inventory use cases
        let inventory_overview = Arc::new(GetInventoryOverviewUseCaseImpl {
            gateway: inventory_gateway.clone(),
            catalog: catalog.clone(),
            store: inventory_store.clone(),
            logger: logger.clone(),
        });
        let add_inventory = Arc::new(AddInventoryEntryUseCaseImpl {
            gateway: inventory_gateway.clone(),
            catalog: catalog.clone(),
            store: inventory_store.clone(),
            logger: logger.clone(),
        });
        let update_inventory = Arc::new(UpdateInventoryEntryUseCaseImpl {
            gateway: inventory_gateway.clone(),
            store: inventory_store.clone(),
            logger: logger.clone(),
        });
        let remove_inventory = Arc::new(RemoveInventoryEntryUseCaseImpl {
            gateway: inventory_gateway.clone(),
            store: inventory_store.clone(),
            logger: logger.clone(),
        });
        let consume_ingredient = Arc::new(ConsumeIngredientUseCaseImpl {
            gateway: inventory_gateway.clone(),
            store: inventory_store.clone(),
            logger: logger.clone(),
        });
        let batch_remove_inventory = Arc::new(BatchRemoveInventoryUseCaseImpl {
            gateway: inventory_gateway,
            store: inventory_store,
            logger,
        });

        Self {
            catalog,
            selection,
            refresh_catalog,
            create_ingredient,
            update_ingredient,
            delete_ingredient,
            batch_delete_ingredients,
            check_recipe,
            delete_recipe,
            add_to_cart,
            add_recipe_to_cart,
            remove_from_cart,
            batch_remove_from_cart,
            refresh_shopping_list,
            confirm_purchase,
            list_history,
            reorder,
            delete_order,
            inventory_overview,
            add_inventory,
            update_inventory,
            remove_inventory,
            consume_ingredient,
            batch_remove_inventory,
        }
    }
}
