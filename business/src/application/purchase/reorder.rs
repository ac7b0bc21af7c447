use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::use_cases::add_to_cart::AddToCartUseCase;
use crate::domain::purchase::use_cases::refresh_shopping_list::RefreshShoppingListUseCase;
use crate::domain::purchase::use_cases::reorder::ReorderUseCase;

/// Reorder is "add these ingredients to the current Draft cart", not a new
/// order type, so it forwards to the same add-to-cart path the recipe flow
/// uses.
pub struct ReorderUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub add_to_cart: Arc<dyn AddToCartUseCase>,
    pub refresh_shopping_list: Arc<dyn RefreshShoppingListUseCase>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ReorderUseCase for ReorderUseCaseImpl {
    async fn execute(&self, order_id: i64) -> Result<usize, PurchaseError> {
        let order = self.gateway.order_detail(order_id).await?;
        let ingredient_ids = order.ingredient_ids();

        if ingredient_ids.is_empty() {
            self.logger
                .info(&format!("Order {} has no items to re-add", order_id));
            return Ok(0);
        }

        let count = ingredient_ids.len();
        self.add_to_cart.execute(ingredient_ids).await?;
        self.refresh_shopping_list.execute().await?;

        self.logger.info(&format!(
            "Re-added {} ingredients from order {}",
            count, order_id
        ));
        Ok(count)
    }
}
