use crate::domain::shared::batch::BatchOutcome;

#[derive(Debug, thiserror::Error)]
pub enum InventoryError {
    #[error("inventory.unknown_ingredient")]
    UnknownIngredient,
    #[error("inventory.shelf_life_not_positive")]
    ShelfLifeNotPositive,
    #[error("inventory.batch_incomplete")]
    BatchIncomplete(BatchOutcome),
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
