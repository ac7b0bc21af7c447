use serde::{Deserialize, Serialize};

use business::domain::errors::GatewayError;
use business::domain::ingredient::model::{
    Ingredient, IngredientCategory, IngredientDraft, StorageType,
};

/// Wire shape for catalog entries. Category and storage travel as small
/// integers; an unknown code is a decode failure, not a silent default.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientEntity {
    pub id: i64,
    pub name: String,
    pub category: i32,
    pub shelf_life_days: i64,
    pub storage_type: i32,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Result<Ingredient, GatewayError> {
        let category =
            IngredientCategory::from_code(self.category).ok_or(GatewayError::Decode)?;
        let storage_type = StorageType::from_code(self.storage_type).ok_or(GatewayError::Decode)?;

        Ok(Ingredient::from_gateway(
            self.id,
            self.name,
            category,
            self.shelf_life_days,
            storage_type,
            self.image_url,
        ))
    }
}

/// Outgoing payload for create/update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientPayload {
    pub name: String,
    pub category: i32,
    pub shelf_life_days: i64,
    pub storage_type: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl IngredientPayload {
    pub fn from_domain(draft: &IngredientDraft) -> Self {
        Self {
            name: draft.name.clone(),
            category: draft.category.code(),
            shelf_life_days: draft.shelf_life_days,
            storage_type: draft.storage_type.code(),
            image_url: draft.image_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_decode_wire_codes_into_domain_enums() {
        let entity: IngredientEntity = serde_json::from_str(
            r#"{"id":5,"name":"Chicken","category":2,"shelfLifeDays":7,"storageType":1,"imageUrl":null}"#,
        )
        .unwrap();

        let ingredient = entity.into_domain().unwrap();

        assert_eq!(ingredient.category, IngredientCategory::Meat);
        assert_eq!(ingredient.storage_type, StorageType::Refrigerated);
    }

    #[test]
    fn should_reject_unknown_category_code() {
        let entity: IngredientEntity = serde_json::from_str(
            r#"{"id":5,"name":"Chicken","category":9,"shelfLifeDays":7,"storageType":1}"#,
        )
        .unwrap();

        assert!(matches!(
            entity.into_domain().unwrap_err(),
            GatewayError::Decode
        ));
    }

    #[test]
    fn should_serialize_payload_with_wire_codes() {
        let draft = IngredientDraft::new(
            "Chicken".to_string(),
            IngredientCategory::Meat,
            7,
            StorageType::Refrigerated,
            None,
        )
        .unwrap();

        let json = serde_json::to_value(IngredientPayload::from_domain(&draft)).unwrap();

        assert_eq!(json["category"], 2);
        assert_eq!(json["storageType"], 1);
        assert_eq!(json["shelfLifeDays"], 7);
    }
}
