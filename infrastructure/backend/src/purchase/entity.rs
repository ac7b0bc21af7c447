use chrono::{DateTime, Utc};
use serde::Deserialize;

use business::domain::errors::GatewayError;
use business::domain::purchase::model::{PurchaseOrder, PurchaseOrderItem, PurchaseStatus};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItemEntity {
    pub ingredient_id: i64,
    pub ingredient_name: String,
}

impl PurchaseOrderItemEntity {
    pub fn into_domain(self) -> PurchaseOrderItem {
        PurchaseOrderItem {
            ingredient_id: self.ingredient_id,
            ingredient_name: self.ingredient_name,
        }
    }
}

/// Wire shape shared by the cart view and history rows. History list rows
/// usually arrive without items; the detail endpoint fills them in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderEntity {
    pub id: i64,
    pub status: i32,
    #[serde(default)]
    pub items: Option<Vec<PurchaseOrderItemEntity>>,
    #[serde(default)]
    pub total_cost: f64,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default)]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub update_time: Option<DateTime<Utc>>,
}

impl PurchaseOrderEntity {
    pub fn into_domain(self) -> Result<PurchaseOrder, GatewayError> {
        let status = PurchaseStatus::from_code(self.status).ok_or(GatewayError::Decode)?;
        let items = self
            .items
            .unwrap_or_default()
            .into_iter()
            .map(PurchaseOrderItemEntity::into_domain)
            .collect();

        Ok(PurchaseOrder::from_gateway(
            self.id,
            status,
            items,
            self.total_cost,
            self.remark,
            self.create_time,
            self.update_time,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_cart_with_items() {
        let entity: PurchaseOrderEntity = serde_json::from_str(
            r#"{"id":31,"status":0,"totalCost":0,"items":[{"ingredientId":1,"ingredientName":"Tomato"}]}"#,
        )
        .unwrap();

        let order = entity.into_domain().unwrap();

        assert_eq!(order.status, PurchaseStatus::Draft);
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].ingredient_id, 1);
    }

    #[test]
    fn should_decode_history_row_without_items() {
        let entity: PurchaseOrderEntity = serde_json::from_str(
            r#"{"id":32,"status":1,"totalCost":12.5,"remark":"weekly shop","createTime":"2024-01-05T10:00:00Z"}"#,
        )
        .unwrap();

        let order = entity.into_domain().unwrap();

        assert_eq!(order.status, PurchaseStatus::Purchased);
        assert!(order.items.is_empty());
    }

    #[test]
    fn should_reject_unknown_status_code() {
        let entity: PurchaseOrderEntity =
            serde_json::from_str(r#"{"id":33,"status":7,"totalCost":0}"#).unwrap();

        assert!(matches!(
            entity.into_domain().unwrap_err(),
            GatewayError::Decode
        ));
    }
}
