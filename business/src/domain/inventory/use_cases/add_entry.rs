use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::ingredient::model::StorageType;
use crate::domain::inventory::errors::InventoryError;

pub struct AddInventoryEntryParams {
    pub ingredient_id: i64,
    pub production_date: NaiveDate,
    /// Defaults to the ingredient's suggested storage when absent.
    pub storage_override: Option<StorageType>,
}

/// Manual stocking. The expiry date is derived client-side from the shelf
/// life currently in the catalog; this is the only path where the client
/// computes dates.
#[async_trait]
pub trait AddInventoryEntryUseCase: Send + Sync {
    async fn execute(&self, params: AddInventoryEntryParams) -> Result<(), InventoryError>;
}
