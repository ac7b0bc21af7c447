use async_trait::async_trait;

use crate::domain::purchase::errors::PurchaseError;
use crate::domain::purchase::shopping_list::ShoppingList;

/// Re-projects the shopping list from the authoritative cart. On failure the
/// stored view is left untouched so the user keeps seeing pre-failure state.
#[async_trait]
pub trait RefreshShoppingListUseCase: Send + Sync {
    async fn execute(&self) -> Result<ShoppingList, PurchaseError>;
}
