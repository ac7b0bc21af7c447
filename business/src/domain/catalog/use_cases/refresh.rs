use async_trait::async_trait;

use crate::domain::errors::GatewayError;

/// Rebuilds the catalog cache from the backend: full ingredient and recipe
/// lists, full replace. Runs after every mutating catalog operation and
/// after every purchase commit.
#[async_trait]
pub trait RefreshCatalogUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), GatewayError>;
}
