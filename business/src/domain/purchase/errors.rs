use crate::domain::shared::batch::BatchOutcome;

#[derive(Debug, thiserror::Error)]
pub enum PurchaseError {
    /// The shopping list (or the server-side cart) is empty. Caught before
    /// any network call when the local view is already empty.
    #[error("purchase.empty_cart")]
    EmptyCart,
    #[error("purchase.recipe_not_found")]
    RecipeNotFound,
    /// A batch removal completed partially. The outcome records which ids
    /// succeeded; the authoritative cart must be re-fetched regardless.
    #[error("purchase.batch_incomplete")]
    BatchIncomplete(BatchOutcome),
    #[error("gateway.request_failed")]
    Gateway(#[from] crate::domain::errors::GatewayError),
}
