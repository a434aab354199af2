// ============================================================================
// FAVORITES CACHE - propertyId -> favoriteId (fuente de verdad local)
// ============================================================================
// Sin I/O: solo el mapa. Cada mutación es atómica para el llamador porque
// todo corre en el único hilo del navegador.
// ============================================================================

use std::collections::HashMap;
use crate::models::{FavoriteEntry, FavoriteId, PropertyId};

#[derive(Clone, Debug, Default)]
pub struct FavoritesCache {
    entries: HashMap<PropertyId, FavoriteId>,
}

impl FavoritesCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, property_id: PropertyId) -> bool {
        self.entries.contains_key(&property_id)
    }

    pub fn get(&self, property_id: PropertyId) -> Option<FavoriteId> {
        self.entries.get(&property_id).copied()
    }

    pub fn set(&mut self, property_id: PropertyId, favorite_id: FavoriteId) {
        self.entries.insert(property_id, favorite_id);
    }

    /// Quitar una entrada, retorna el favoriteId que tenía
    pub fn remove(&mut self, property_id: PropertyId) -> Option<FavoriteId> {
        self.entries.remove(&property_id)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Reconstruir el cache completo a partir del listado del backend
    pub fn replace_all<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = FavoriteEntry>,
    {
        self.entries = entries
            .into_iter()
            .map(|entry| (entry.property_id, entry.favorite_id))
            .collect();
    }

    /// Ids de propiedades favoritas, ordenados
    pub fn snapshot(&self) -> Vec<PropertyId> {
        let mut ids: Vec<PropertyId> = self.entries.keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_is_defined_iff_has() {
        let mut cache = FavoritesCache::new();
        assert!(!cache.has(42));
        assert_eq!(cache.get(42), None);

        cache.set(42, 7);
        assert!(cache.has(42));
        assert_eq!(cache.get(42), Some(7));

        assert_eq!(cache.remove(42), Some(7));
        assert!(!cache.has(42));
        assert_eq!(cache.get(42), None);
        assert_eq!(cache.remove(42), None);
    }

    #[test]
    fn replace_all_rebuilds_wholesale() {
        let mut cache = FavoritesCache::new();
        cache.set(1, 100);
        cache.replace_all(vec![FavoriteEntry::new(9, 2), FavoriteEntry::new(5, 1)]);

        assert!(!cache.has(1));
        assert_eq!(cache.snapshot(), vec![5, 9]);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn set_overwrites_existing_favorite_id() {
        let mut cache = FavoritesCache::new();
        cache.set(3, 10);
        cache.set(3, 11);
        assert_eq!(cache.get(3), Some(11));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn clear_empties_everything() {
        let mut cache = FavoritesCache::new();
        cache.replace_all(vec![FavoriteEntry::new(1, 1), FavoriteEntry::new(2, 2)]);
        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.snapshot().is_empty());
    }
}
