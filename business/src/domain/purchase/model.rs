use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle: at most one Draft order exists at a time (the singleton
/// cart); Draft -> Purchased is irreversible and a fresh Draft is implicitly
/// available again afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PurchaseStatus {
    Draft,
    Purchased,
}

impl PurchaseStatus {
    pub fn code(self) -> i32 {
        match self {
            PurchaseStatus::Draft => 0,
            PurchaseStatus::Purchased => 1,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PurchaseStatus::Draft),
            1 => Some(PurchaseStatus::Purchased),
            _ => None,
        }
    }
}

impl std::fmt::Display for PurchaseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PurchaseStatus::Draft => write!(f, "DRAFT"),
            PurchaseStatus::Purchased => write!(f, "PURCHASED"),
        }
    }
}

/// A cart or order line. Only the ingredient id and a display name are
/// guaranteed; the full catalog entry may no longer exist.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrderItem {
    pub ingredient_id: i64,
    pub ingredient_name: String,
}

/// A purchase order: the Draft singleton cart, or an immutable Purchased
/// history record. Items are lazily resolved for history rows.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseOrder {
    pub id: i64,
    pub status: PurchaseStatus,
    pub items: Vec<PurchaseOrderItem>,
    pub total_cost: f64,
    pub remark: Option<String>,
    pub create_time: Option<DateTime<Utc>>,
    pub update_time: Option<DateTime<Utc>>,
}

impl PurchaseOrder {
    /// Constructor for data already held by the backend (no validation).
    pub fn from_gateway(
        id: i64,
        status: PurchaseStatus,
        items: Vec<PurchaseOrderItem>,
        total_cost: f64,
        remark: Option<String>,
        create_time: Option<DateTime<Utc>>,
        update_time: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            status,
            items,
            total_cost,
            remark,
            create_time,
            update_time,
        }
    }

    pub fn ingredient_ids(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.ingredient_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_round_trip_status_codes() {
        for status in [PurchaseStatus::Draft, PurchaseStatus::Purchased] {
            assert_eq!(PurchaseStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(PurchaseStatus::from_code(2), None);
    }

    #[test]
    fn should_list_ingredient_ids_in_item_order() {
        let order = PurchaseOrder::from_gateway(
            1,
            PurchaseStatus::Draft,
            vec![
                PurchaseOrderItem {
                    ingredient_id: 3,
                    ingredient_name: "Rice".to_string(),
                },
                PurchaseOrderItem {
                    ingredient_id: 1,
                    ingredient_name: "Tomato".to_string(),
                },
            ],
            0.0,
            None,
            None,
            None,
        );

        assert_eq!(order.ingredient_ids(), vec![3, 1]);
    }
}
