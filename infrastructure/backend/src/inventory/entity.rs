use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use business::domain::errors::GatewayError;
use business::domain::ingredient::model::StorageType;
use business::domain::inventory::model::{InventoryDraft, InventoryEntry};

/// Wire shape for stocked batches. Dates are day-granular `YYYY-MM-DD`
/// strings; `updateTime` is a full timestamp.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryEntity {
    pub id: i64,
    pub ingredient_id: i64,
    pub production_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub storage_type: i32,
    pub update_time: DateTime<Utc>,
}

impl InventoryEntity {
    pub fn into_domain(self) -> Result<InventoryEntry, GatewayError> {
        let storage_type = StorageType::from_code(self.storage_type).ok_or(GatewayError::Decode)?;

        Ok(InventoryEntry::from_gateway(
            self.id,
            self.ingredient_id,
            self.production_date,
            self.expiry_date,
            storage_type,
            self.update_time,
        ))
    }
}

/// Outgoing payload for the manual stocking path; carries the client-derived
/// expiry date.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryAddPayload {
    pub ingredient_id: i64,
    pub production_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub storage_type: i32,
}

impl InventoryAddPayload {
    pub fn from_domain(draft: &InventoryDraft) -> Self {
        Self {
            ingredient_id: draft.ingredient_id,
            production_date: draft.production_date,
            expiry_date: draft.expiry_date,
            storage_type: draft.storage_type.code(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryUpdatePayload {
    pub id: i64,
    pub ingredient_id: i64,
    pub production_date: NaiveDate,
    pub expiry_date: NaiveDate,
    pub storage_type: i32,
}

impl InventoryUpdatePayload {
    pub fn from_domain(entry: &InventoryEntry) -> Self {
        Self {
            id: entry.id,
            ingredient_id: entry.ingredient_id,
            production_date: entry.production_date,
            expiry_date: entry.expiry_date,
            storage_type: entry.storage_type.code(),
        }
    }
}
