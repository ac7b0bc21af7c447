use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::gateway::RecipeGateway;
use crate::domain::recipe::model::RecipeCheck;
use crate::domain::recipe::use_cases::check::CheckRecipeUseCase;

pub struct CheckRecipeUseCaseImpl {
    pub gateway: Arc<dyn RecipeGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CheckRecipeUseCase for CheckRecipeUseCaseImpl {
    async fn execute(&self, id: i64) -> Result<RecipeCheck, RecipeError> {
        let check = self.gateway.check(id).await?;
        self.logger.debug(&format!(
            "Recipe {} feasibility: can_make={}, {} missing",
            id,
            check.can_make,
            check.missing_ingredients.len()
        ));
        Ok(check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::test_support::{mock_logger, MockRecipeGw};

    #[tokio::test]
    async fn should_pass_through_feasibility_result() {
        let mut gateway = MockRecipeGw::new();
        gateway.expect_check().returning(|_| {
            Ok(RecipeCheck {
                can_make: false,
                missing_ingredients: Vec::new(),
            })
        });

        let use_case = CheckRecipeUseCaseImpl {
            gateway: Arc::new(gateway),
            logger: mock_logger(),
        };

        let check = use_case.execute(2).await.unwrap();

        assert!(!check.can_make);
    }
}
