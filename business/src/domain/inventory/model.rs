use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::domain::ingredient::model::{Ingredient, StorageType};

use super::errors::InventoryError;
use super::freshness;

/// A stocked batch of one ingredient. `expiry_date` is derived from the
/// production date and the shelf life known at creation time; it is never
/// re-derived if the catalog's shelf life changes later.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryEntry {
    pub id: i64,
    pub ingredient_id: i64,
    pub production_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub storage_type: StorageType,
    pub update_time: DateTime<Utc>,
}

impl InventoryEntry {
    /// Constructor for data already held by the backend (no validation).
    pub fn from_gateway(
        id: i64,
        ingredient_id: i64,
        production_date: NaiveDate,
        expiry_date: NaiveDate,
        storage_type: StorageType,
        update_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            ingredient_id,
            production_date,
            expiry_date,
            storage_type,
            update_time,
        }
    }
}

/// Payload for the manual stocking path. This is the only path where the
/// client computes the expiry date; purchase commits derive it server-side.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryDraft {
    pub ingredient_id: i64,
    pub production_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub storage_type: StorageType,
}

impl InventoryDraft {
    /// Derives `expiry_date = production_date + shelf_life_days` and defaults
    /// the storage type to the ingredient's suggested one.
    pub fn new(
        ingredient: &Ingredient,
        production_date: NaiveDate,
        storage_override: Option<StorageType>,
    ) -> Result<Self, InventoryError> {
        if ingredient.shelf_life_days <= 0 {
            return Err(InventoryError::ShelfLifeNotPositive);
        }

        Ok(Self {
            ingredient_id: ingredient.id,
            production_date,
            expiry_date: production_date + Duration::days(ingredient.shelf_life_days),
            storage_type: storage_override.unwrap_or(ingredient.storage_type),
        })
    }
}

/// Inventory row joined with catalog metadata for display: remaining days,
/// freshness percentage and the expiry flags, all computed at read time.
#[derive(Debug, Clone)]
pub struct StockedIngredient {
    pub entry: InventoryEntry,
    pub ingredient: Ingredient,
    pub remaining_days: i64,
    pub freshness_percent: u8,
    pub expiring_soon: bool,
    pub expired: bool,
}

impl StockedIngredient {
    pub fn project(entry: InventoryEntry, ingredient: Ingredient, today: NaiveDate) -> Self {
        let remaining_days = freshness::remaining_days_on(entry.expiry_date, today);
        let freshness_percent =
            freshness::freshness_percent_on(entry.production_date, entry.expiry_date, today);
        let expiring_soon = freshness::is_expiring_soon_on(
            entry.expiry_date,
            today,
            freshness::EXPIRING_SOON_THRESHOLD_DAYS,
        );
        let expired = freshness::is_expired_on(entry.expiry_date, today);

        Self {
            entry,
            ingredient,
            remaining_days,
            freshness_percent,
            expiring_soon,
            expired,
        }
    }
}
