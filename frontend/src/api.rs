use crate::web::{FetchHttpClient, LocalStorage};
use printstrokes::{AuthService, ClientConfig, StorefrontApi};

/// 后端地址，构建时可通过 `PRINTSTROKES_API_BASE` 覆盖
pub fn client_config() -> ClientConfig {
    ClientConfig::from_override(option_env!("PRINTSTROKES_API_BASE"))
}

pub fn storefront_api() -> StorefrontApi<FetchHttpClient> {
    StorefrontApi::new(client_config(), FetchHttpClient)
}

pub fn auth_service() -> AuthService<FetchHttpClient, LocalStorage> {
    AuthService::new(storefront_api(), LocalStorage)
}
