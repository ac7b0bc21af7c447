use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::use_cases::delete_order::DeletePurchaseOrderUseCase;

pub struct DeletePurchaseOrderUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeletePurchaseOrderUseCase for DeletePurchaseOrderUseCaseImpl {
    async fn execute(&self, order_id: i64) -> Result<(), PurchaseError> {
        self.gateway.delete_order(order_id).await?;
        self.logger
            .info(&format!("Purchase record {} deleted", order_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_logger, MockPurchaseGw};
    use mockall::predicate::eq;

    #[tokio::test]
    async fn should_delete_record_by_id() {
        let mut gateway = MockPurchaseGw::new();
        gateway
            .expect_delete_order()
            .with(eq(8))
            .once()
            .returning(|_| Ok(()));

        let use_case = DeletePurchaseOrderUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        assert!(use_case.execute(8).await.is_ok());
    }
}
