pub mod gateway;
pub mod session_service;

#[cfg(target_arch = "wasm32")]
pub mod api_client;

pub use gateway::{FavoritesGateway, GatewayError};
pub use session_service::SessionProvider;

#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
#[cfg(target_arch = "wasm32")]
pub use session_service::BrowserSession;
