#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.name_empty")]
    NameEmpty,
    #[error("ingredient.shelf_life_not_positive")]
    ShelfLifeNotPositive,
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
