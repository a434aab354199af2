// ============================================================================
// STATE MODULE - Estado local en memoria
// ============================================================================

pub mod favorites_cache;

pub use favorites_cache::FavoritesCache;
