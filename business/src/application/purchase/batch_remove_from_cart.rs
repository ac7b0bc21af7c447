use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::GatewayError;
use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::use_cases::batch_remove_from_cart::BatchRemoveFromCartUseCase;
use crate::domain::shared::batch::BatchOutcome;

pub struct BatchRemoveFromCartUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl BatchRemoveFromCartUseCase for BatchRemoveFromCartUseCaseImpl {
    async fn execute(&self, ingredient_ids: Vec<i64>) -> Result<BatchOutcome, PurchaseError> {
        self.logger.info(&format!(
            "Batch removing {} ingredients from cart",
            ingredient_ids.len()
        ));

        // One request per id, all in flight at once. The backend sees N
        // independent removals; there is no transaction around them.
        let mut handles = Vec::with_capacity(ingredient_ids.len());
        for id in ingredient_ids {
            let gateway = Arc::clone(&self.gateway);
            handles.push((id, tokio::spawn(async move {
                gateway.remove_from_cart(id).await
            })));
        }

        let mut outcome = BatchOutcome::default();
        for (id, handle) in handles {
            match handle.await {
                Ok(Ok(())) => outcome.record_success(id),
                Ok(Err(error)) => outcome.record_failure(id, error),
                Err(_) => outcome.record_failure(id, GatewayError::Network),
            }
        }

        if outcome.is_complete() {
            Ok(outcome)
        } else {
            self.logger.warn(&format!(
                "Batch removal incomplete: {} removed, {} failed",
                outcome.succeeded.len(),
                outcome.failed.len()
            ));
            Err(PurchaseError::BatchIncomplete(outcome))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_logger, MockPurchaseGw};

    #[tokio::test]
    async fn should_remove_all_when_every_request_succeeds() {
        let mut gateway = MockPurchaseGw::new();
        gateway
            .expect_remove_from_cart()
            .times(3)
            .returning(|_| Ok(()));

        let use_case = BatchRemoveFromCartUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(vec![1, 2, 3]).await.unwrap();

        assert_eq!(outcome.succeeded.len(), 3);
        assert!(outcome.is_complete());
    }

    #[tokio::test]
    async fn should_report_partial_completion_when_one_id_rejected() {
        let mut gateway = MockPurchaseGw::new();
        gateway.expect_remove_from_cart().times(3).returning(|id| {
            if id == 11 {
                Err(GatewayError::backend("cannot remove"))
            } else {
                Ok(())
            }
        });

        let use_case = BatchRemoveFromCartUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let error = use_case.execute(vec![10, 11, 12]).await.unwrap_err();

        // 10 and 12 are gone server-side, 11 survived; the caller learns
        // exactly that and must re-fetch the cart.
        match error {
            PurchaseError::BatchIncomplete(outcome) => {
                assert_eq!(outcome.succeeded, vec![10, 12]);
                assert_eq!(outcome.failed.len(), 1);
                assert_eq!(outcome.failed[0].0, 11);
            }
            other => panic!("expected BatchIncomplete, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_succeed_with_empty_outcome_for_empty_id_set() {
        let gateway = MockPurchaseGw::new();

        let use_case = BatchRemoveFromCartUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let outcome = use_case.execute(Vec::new()).await.unwrap();

        assert!(outcome.succeeded.is_empty());
        assert!(outcome.is_complete());
    }
}
