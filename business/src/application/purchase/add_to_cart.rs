use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::use_cases::add_to_cart::AddToCartUseCase;

pub struct AddToCartUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, ingredient_ids: Vec<i64>) -> Result<(), PurchaseError> {
        if ingredient_ids.is_empty() {
            self.logger.debug("No ingredients to add to cart");
            return Ok(());
        }

        self.logger.info(&format!(
            "Adding {} ingredients to cart",
            ingredient_ids.len()
        ));
        self.gateway.add_to_cart(&ingredient_ids).await?;
        Ok(())
    }
}
