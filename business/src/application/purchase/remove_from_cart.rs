use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::use_cases::remove_from_cart::RemoveFromCartUseCase;

pub struct RemoveFromCartUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCartUseCase for RemoveFromCartUseCaseImpl {
    async fn execute(&self, ingredient_id: i64) -> Result<(), PurchaseError> {
        self.logger
            .info(&format!("Removing ingredient {} from cart", ingredient_id));
        self.gateway.remove_from_cart(ingredient_id).await?;
        Ok(())
    }
}
