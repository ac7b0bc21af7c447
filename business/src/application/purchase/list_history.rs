use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::gateway::PurchaseGateway;
use crate::domain::purchase::model::{PurchaseOrder, PurchaseStatus};
use crate::domain::purchase::use_cases::list_history::ListPurchaseHistoryUseCase;

pub struct ListPurchaseHistoryUseCaseImpl {
    pub gateway: Arc<dyn PurchaseGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListPurchaseHistoryUseCase for ListPurchaseHistoryUseCaseImpl {
    async fn execute(&self) -> Result<Vec<PurchaseOrder>, PurchaseError> {
        let orders = self
            .gateway
            .orders(Some(PurchaseStatus::Purchased))
            .await?;
        self.logger
            .info(&format!("Loaded {} purchase records", orders.len()));

        // Details load concurrently; one failed detail empties that record's
        // items instead of failing the whole listing.
        let mut handles = Vec::with_capacity(orders.len());
        for order in orders {
            let gateway = Arc::clone(&self.gateway);
            let logger = Arc::clone(&self.logger);
            handles.push(tokio::spawn(async move {
                match gateway.order_detail(order.id).await {
                    Ok(detail) => PurchaseOrder {
                        items: detail.items,
                        ..order
                    },
                    Err(error) => {
                        logger.warn(&format!(
                            "Detail for order {} unavailable: {}",
                            order.id, error
                        ));
                        PurchaseOrder {
                            items: Vec::new(),
                            ..order
                        }
                    }
                }
            }));
        }

        let mut detailed = Vec::with_capacity(handles.len());
        for handle in handles {
            if let Ok(order) = handle.await {
                detailed.push(order);
            }
        }
        Ok(detailed)
    }
}
