// ============================================================================
// FAVORITE MODELS - Estructuras compartidas con el backend
// ============================================================================

use serde::{Deserialize, Serialize};

/// Identificador de propiedad (listing) en el backend
pub type PropertyId = i64;

/// Identificador emitido por el backend al crear un favorito
pub type FavoriteId = i64;

/// Un favorito confirmado por el backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteEntry {
    #[serde(rename = "propertyId", alias = "property_id")]
    pub property_id: PropertyId,
    #[serde(rename = "id", alias = "favoriteId", alias = "favorite_id")]
    pub favorite_id: FavoriteId,
}

impl FavoriteEntry {
    pub fn new(property_id: PropertyId, favorite_id: FavoriteId) -> Self {
        Self { property_id, favorite_id }
    }
}

/// Body del POST de creación
#[derive(Debug, Serialize)]
pub struct CreateFavoriteRequest<'a> {
    #[serde(rename = "propertyId")]
    pub property_id: PropertyId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
}

/// Respuesta del POST de creación
///
/// El backend a veces envuelve el recurso en `data`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum CreateFavoriteResponse {
    Wrapped { data: CreatedFavorite },
    Bare(CreatedFavorite),
}

#[derive(Debug, Deserialize)]
pub struct CreatedFavorite {
    #[serde(rename = "id", alias = "favoriteId", alias = "favorite_id")]
    pub favorite_id: FavoriteId,
}

impl CreateFavoriteResponse {
    pub fn favorite_id(&self) -> FavoriteId {
        match self {
            CreateFavoriteResponse::Wrapped { data } => data.favorite_id,
            CreateFavoriteResponse::Bare(created) => created.favorite_id,
        }
    }
}

/// Respuesta del GET de listado: array plano o envuelto
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListFavoritesResponse {
    List(Vec<FavoriteEntry>),
    Favorites { favorites: Vec<FavoriteEntry> },
    Data { data: Vec<FavoriteEntry> },
}

impl ListFavoritesResponse {
    pub fn into_entries(self) -> Vec<FavoriteEntry> {
        match self {
            ListFavoritesResponse::List(entries) => entries,
            ListFavoritesResponse::Favorites { favorites } => favorites,
            ListFavoritesResponse::Data { data } => data,
        }
    }
}

/// Leer el id del atributo `data-favorite-property` de un control
pub fn parse_property_id(raw: &str) -> Option<PropertyId> {
    raw.trim().parse::<PropertyId>().ok().filter(|id| *id > 0)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleDirection {
    Add,
    Remove,
}

/// Petición efímera: se crea en el click y se descarta tras un round trip
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    pub property_id: PropertyId,
    pub direction: ToggleDirection,
}

/// Resultado de un toggle (nunca se propaga como error)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added(FavoriteId),
    Removed,
    /// Ya hay una petición en vuelo para esta propiedad
    AlreadyPending,
    /// No hay token de sesión, no se envió nada
    Unauthenticated,
    /// Se pidió quitar un favorito que no está en cache
    NotCached,
    /// El backend respondió 401, logout programado
    SessionExpired,
    /// El listado inicial sigue en vuelo, no se envió nada
    Loading,
    Failed(String),
}

/// Estado observado por el cliente para una propiedad
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FavoriteState {
    Unknown,
    Favorited,
    NotFavorited,
    PendingAdd,
    PendingRemove,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FavoritesStats {
    pub count: usize,
    pub property_ids: Vec<PropertyId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

impl NotificationKind {
    /// Sufijo de clase CSS del toast
    pub fn css_suffix(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Warning => "warning",
            NotificationKind::Info => "info",
        }
    }
}
