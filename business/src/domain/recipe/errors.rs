#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
