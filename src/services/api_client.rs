// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP de favoritos.
// Cada request compite con un timer: si vence, se reporta Timeout.
// ============================================================================

use std::future::Future;
use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use crate::config::CONFIG;
use crate::models::{
    CreateFavoriteRequest, CreateFavoriteResponse, FavoriteEntry, FavoriteId,
    ListFavoritesResponse, PropertyId,
};
use crate::services::gateway::{FavoritesGateway, GatewayError};

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    timeout_ms: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.backend_url.clone(),
            timeout_ms: CONFIG.network_timeout_ms,
        }
    }

    fn favorites_url(&self) -> String {
        format!("{}/api/favorites", self.base_url)
    }

    fn favorite_url(&self, favorite_id: FavoriteId) -> String {
        format!("{}/api/favorites/{}", self.base_url, favorite_id)
    }

    async fn with_timeout<T, F>(&self, request: F) -> Result<T, GatewayError>
    where
        F: Future<Output = Result<T, GatewayError>>,
    {
        let request = Box::pin(request);
        match select(request, TimeoutFuture::new(self.timeout_ms)).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                log::warn!("⏱️ Request de favoritos sin respuesta tras {} ms", self.timeout_ms);
                Err(GatewayError::Timeout { ms: self.timeout_ms })
            }
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Convertir respuestas no exitosas en GatewayError
async fn check_status(response: Response) -> Result<Response, GatewayError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let error_text = response.text().await
        .unwrap_or_else(|_| response.status_text());
    Err(GatewayError::from_status(status, error_text))
}

#[async_trait(?Send)]
impl FavoritesGateway for ApiClient {
    async fn list_favorites(&self, token: &str) -> Result<Vec<FavoriteEntry>, GatewayError> {
        let url = self.favorites_url();
        log::info!("📋 Obteniendo favoritos");

        self.with_timeout(async {
            let response = Request::get(&url)
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            let response = check_status(response).await?;
            let body = response
                .json::<ListFavoritesResponse>()
                .await
                .map_err(|e| GatewayError::Parse(e.to_string()))?;
            Ok(body.into_entries())
        })
        .await
    }

    async fn create_favorite(
        &self,
        token: &str,
        property_id: PropertyId,
        notes: Option<&str>,
    ) -> Result<FavoriteId, GatewayError> {
        let url = self.favorites_url();
        let body = CreateFavoriteRequest { property_id, notes };
        log::info!("⭐ Creando favorito para propiedad {}", property_id);

        self.with_timeout(async {
            let response = Request::post(&url)
                .header("Authorization", &bearer(token))
                .json(&body)
                .map_err(|e| GatewayError::Serialization(e.to_string()))?
                .send()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            let response = check_status(response).await?;
            let created = response
                .json::<CreateFavoriteResponse>()
                .await
                .map_err(|e| GatewayError::Parse(e.to_string()))?;
            Ok(created.favorite_id())
        })
        .await
    }

    async fn delete_favorite(&self, token: &str, favorite_id: FavoriteId) -> Result<(), GatewayError> {
        let url = self.favorite_url(favorite_id);
        log::info!("🗑️ Borrando favorito {}", favorite_id);

        self.with_timeout(async {
            let response = Request::delete(&url)
                .header("Authorization", &bearer(token))
                .send()
                .await
                .map_err(|e| GatewayError::Network(e.to_string()))?;
            check_status(response).await?;
            Ok(())
        })
        .await
    }
}
