use serde::{Deserialize, Serialize};

use super::errors::IngredientError;

/// Storage advice for an ingredient, also copied onto inventory entries at
/// stocking time. Transmitted as a small integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    RoomTemp,
    Refrigerated,
    Frozen,
}

impl StorageType {
    pub fn code(self) -> i32 {
        match self {
            StorageType::RoomTemp => 0,
            StorageType::Refrigerated => 1,
            StorageType::Frozen => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(StorageType::RoomTemp),
            1 => Some(StorageType::Refrigerated),
            2 => Some(StorageType::Frozen),
            _ => None,
        }
    }
}

impl std::fmt::Display for StorageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageType::RoomTemp => write!(f, "room_temp"),
            StorageType::Refrigerated => write!(f, "refrigerated"),
            StorageType::Frozen => write!(f, "frozen"),
        }
    }
}

impl std::str::FromStr for StorageType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "room_temp" => Ok(StorageType::RoomTemp),
            "refrigerated" => Ok(StorageType::Refrigerated),
            "frozen" => Ok(StorageType::Frozen),
            _ => Err(format!("Invalid storage type: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngredientCategory {
    Fruit,
    Vegetable,
    Meat,
    Carb,
    Spice,
}

impl IngredientCategory {
    pub fn code(self) -> i32 {
        match self {
            IngredientCategory::Fruit => 0,
            IngredientCategory::Vegetable => 1,
            IngredientCategory::Meat => 2,
            IngredientCategory::Carb => 3,
            IngredientCategory::Spice => 4,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(IngredientCategory::Fruit),
            1 => Some(IngredientCategory::Vegetable),
            2 => Some(IngredientCategory::Meat),
            3 => Some(IngredientCategory::Carb),
            4 => Some(IngredientCategory::Spice),
            _ => None,
        }
    }

    pub const ALL: [IngredientCategory; 5] = [
        IngredientCategory::Fruit,
        IngredientCategory::Vegetable,
        IngredientCategory::Meat,
        IngredientCategory::Carb,
        IngredientCategory::Spice,
    ];
}

impl std::fmt::Display for IngredientCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngredientCategory::Fruit => write!(f, "fruit"),
            IngredientCategory::Vegetable => write!(f, "vegetable"),
            IngredientCategory::Meat => write!(f, "meat"),
            IngredientCategory::Carb => write!(f, "carb"),
            IngredientCategory::Spice => write!(f, "spice"),
        }
    }
}

impl std::str::FromStr for IngredientCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fruit" => Ok(IngredientCategory::Fruit),
            "vegetable" => Ok(IngredientCategory::Vegetable),
            "meat" => Ok(IngredientCategory::Meat),
            "carb" => Ok(IngredientCategory::Carb),
            "spice" => Ok(IngredientCategory::Spice),
            _ => Err(format!("Invalid ingredient category: {}", s)),
        }
    }
}

/// Catalog metadata for an ingredient. Referenced by id from inventory,
/// recipes and the cart; never embedded.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub category: IngredientCategory,
    pub shelf_life_days: i64,
    pub storage_type: StorageType,
    pub image_url: Option<String>,
}

/// Payload for creating or updating a catalog entry; the backend assigns ids.
#[derive(Debug, Clone)]
pub struct IngredientDraft {
    pub name: String,
    pub category: IngredientCategory,
    pub shelf_life_days: i64,
    pub storage_type: StorageType,
    pub image_url: Option<String>,
}

impl IngredientDraft {
    pub fn new(
        name: String,
        category: IngredientCategory,
        shelf_life_days: i64,
        storage_type: StorageType,
        image_url: Option<String>,
    ) -> Result<Self, IngredientError> {
        if name.trim().is_empty() {
            return Err(IngredientError::NameEmpty);
        }
        if shelf_life_days <= 0 {
            return Err(IngredientError::ShelfLifeNotPositive);
        }

        Ok(Self {
            name,
            category,
            shelf_life_days,
            storage_type,
            image_url,
        })
    }
}

impl Ingredient {
    /// Constructor for data already held by the backend (no validation).
    pub fn from_gateway(
        id: i64,
        name: String,
        category: IngredientCategory,
        shelf_life_days: i64,
        storage_type: StorageType,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id,
            name,
            category,
            shelf_life_days,
            storage_type,
            image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_draft_when_fields_valid() {
        let result = IngredientDraft::new(
            "Tomato".to_string(),
            IngredientCategory::Vegetable,
            7,
            StorageType::Refrigerated,
            None,
        );

        assert!(result.is_ok());
        let draft = result.unwrap();
        assert_eq!(draft.name, "Tomato");
        assert_eq!(draft.shelf_life_days, 7);
    }

    #[test]
    fn should_reject_when_name_empty() {
        let result = IngredientDraft::new(
            "   ".to_string(),
            IngredientCategory::Fruit,
            3,
            StorageType::RoomTemp,
            None,
        );

        assert!(matches!(result.unwrap_err(), IngredientError::NameEmpty));
    }

    #[test]
    fn should_reject_when_shelf_life_not_positive() {
        let result = IngredientDraft::new(
            "Milk".to_string(),
            IngredientCategory::Carb,
            0,
            StorageType::Refrigerated,
            None,
        );

        assert!(matches!(
            result.unwrap_err(),
            IngredientError::ShelfLifeNotPositive
        ));
    }

    #[test]
    fn should_round_trip_category_codes() {
        for category in IngredientCategory::ALL {
            assert_eq!(
                IngredientCategory::from_code(category.code()),
                Some(category)
            );
        }
        assert_eq!(IngredientCategory::from_code(5), None);
    }

    #[test]
    fn should_round_trip_storage_codes() {
        for storage in [
            StorageType::RoomTemp,
            StorageType::Refrigerated,
            StorageType::Frozen,
        ] {
            assert_eq!(StorageType::from_code(storage.code()), Some(storage));
        }
        assert_eq!(StorageType::from_code(-1), None);
    }

    #[test]
    fn should_round_trip_labels() {
        for category in IngredientCategory::ALL {
            let label = category.to_string();
            assert_eq!(label.parse::<IngredientCategory>(), Ok(category));
        }
    }
}
