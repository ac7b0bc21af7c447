use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::{IngredientCategory, StorageType};

pub struct CreateIngredientParams {
    pub name: String,
    pub category: IngredientCategory,
    pub shelf_life_days: i64,
    pub storage_type: StorageType,
    pub image_url: Option<String>,
}

#[async_trait]
pub trait CreateIngredientUseCase: Send + Sync {
    async fn execute(&self, params: CreateIngredientParams) -> Result<(), IngredientError>;
}
