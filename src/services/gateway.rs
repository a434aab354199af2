// ============================================================================
// FAVORITES GATEWAY - Contrato del API remoto de favoritos
// ============================================================================

use async_trait::async_trait;
use crate::models::{FavoriteEntry, FavoriteId, PropertyId};

/// Operaciones remotas sobre favoritos del usuario autenticado
///
/// Un solo hilo (navegador), por eso los futures no son `Send`.
#[async_trait(?Send)]
pub trait FavoritesGateway {
    /// Listar todos los favoritos del usuario
    async fn list_favorites(&self, token: &str) -> Result<Vec<FavoriteEntry>, GatewayError>;

    /// Crear un favorito, retorna el id emitido por el backend
    async fn create_favorite(
        &self,
        token: &str,
        property_id: PropertyId,
        notes: Option<&str>,
    ) -> Result<FavoriteId, GatewayError>;

    /// Borrar por favoriteId (no por propertyId)
    async fn delete_favorite(&self, token: &str, favorite_id: FavoriteId) -> Result<(), GatewayError>;
}

/// Error del gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// HTTP 401: sesión expirada o token inválido
    Unauthorized,
    Http { status: u16, message: String },
    Network(String),
    Parse(String),
    Serialization(String),
    Timeout { ms: u32 },
}

impl GatewayError {
    /// Clasificar un status HTTP no exitoso
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 {
            GatewayError::Unauthorized
        } else {
            GatewayError::Http { status, message }
        }
    }

    pub fn is_auth_rejection(&self) -> bool {
        matches!(self, GatewayError::Unauthorized)
    }
}

impl std::fmt::Display for GatewayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GatewayError::Unauthorized => write!(f, "Session expired or invalid token"),
            GatewayError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            GatewayError::Network(msg) => write!(f, "Network error: {}", msg),
            GatewayError::Parse(msg) => write!(f, "Parse error: {}", msg),
            GatewayError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
            GatewayError::Timeout { ms } => write!(f, "Request timed out after {} ms", ms),
        }
    }
}

impl std::error::Error for GatewayError {}
