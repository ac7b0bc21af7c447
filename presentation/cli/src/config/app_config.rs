use super::backend_config::BackendConfig;

pub struct AppConfig {
    pub backend: BackendConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            backend: BackendConfig::from_env(),
        }
    }
}
