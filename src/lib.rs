// ============================================================================
// FAVORITES SYNC - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Sincronización de favoritos del marketplace inmobiliario:
// - Models: Estructuras compartidas con backend
// - State: Cache en memoria propertyId -> favoriteId
// - Services: SOLO comunicación API + token de sesión
// - ViewModels: Controlador (cache + backend + vista)
// - Views / DOM: Presenter, toasts y delegación de eventos (solo wasm32)
// ============================================================================

pub mod config;
pub mod models;
pub mod state;
pub mod services;
pub mod viewmodels;
pub mod views;
pub mod utils;

#[cfg(target_arch = "wasm32")]
pub mod dom;

#[cfg(target_arch = "wasm32")]
mod app;

pub use models::{FavoriteEntry, FavoriteId, FavoriteState, FavoritesStats, PropertyId, ToggleOutcome};
pub use state::FavoritesCache;
pub use viewmodels::FavoritesController;
