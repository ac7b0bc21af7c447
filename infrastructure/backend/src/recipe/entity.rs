use serde::Deserialize;

use business::domain::errors::GatewayError;
use business::domain::recipe::model::{Recipe, RecipeCheck, RecipeType};

use crate::ingredient::entity::IngredientEntity;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeEntity {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub recipe_type: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Absent on list rows; the detail endpoint always sends it.
    #[serde(default)]
    pub ingredient_ids: Option<Vec<i64>>,
}

impl RecipeEntity {
    pub fn into_domain(self) -> Result<Recipe, GatewayError> {
        let recipe_type = RecipeType::from_code(self.recipe_type).ok_or(GatewayError::Decode)?;

        Ok(Recipe::from_gateway(
            self.id,
            self.name,
            recipe_type,
            self.description,
            self.cover_url,
            self.ingredient_ids.unwrap_or_default(),
        ))
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeCheckEntity {
    pub can_make: bool,
    #[serde(default)]
    pub missing_ingredients: Vec<IngredientEntity>,
}

impl RecipeCheckEntity {
    pub fn into_domain(self) -> Result<RecipeCheck, GatewayError> {
        let missing_ingredients = self
            .missing_ingredients
            .into_iter()
            .map(IngredientEntity::into_domain)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RecipeCheck {
            can_make: self.can_make,
            missing_ingredients,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_missing_ingredient_ids_to_empty() {
        let entity: RecipeEntity =
            serde_json::from_str(r#"{"id":9,"name":"Stew","type":1,"description":"slow"}"#)
                .unwrap();

        let recipe = entity.into_domain().unwrap();

        assert_eq!(recipe.recipe_type, RecipeType::Slow);
        assert!(recipe.ingredient_ids.is_empty());
    }

    #[test]
    fn should_keep_ingredient_ids_from_detail_payload() {
        let entity: RecipeEntity = serde_json::from_str(
            r#"{"id":9,"name":"Stew","type":0,"description":"","ingredientIds":[1,2]}"#,
        )
        .unwrap();

        assert_eq!(entity.into_domain().unwrap().ingredient_ids, vec![1, 2]);
    }
}
