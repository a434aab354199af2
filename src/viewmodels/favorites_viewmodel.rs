// ============================================================================
// FAVORITES VIEWMODEL - Controlador de sincronización de favoritos
// ============================================================================
// Cache, backend y vista siempre de acuerdo:
// - El cache solo cambia después de la confirmación del backend
// - Una sola petición en vuelo por propiedad (set de pendientes)
// - Un listado que llega tarde no pisa lo confirmado mientras viajaba
// - El control que originó el click se rehabilita siempre (guard)
// ============================================================================

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use crate::models::{
    FavoriteId, FavoriteState, FavoritesStats, NotificationKind, PropertyId,
    ToggleDirection, ToggleOutcome, ToggleRequest,
};
use crate::services::gateway::{FavoritesGateway, GatewayError};
use crate::services::session_service::SessionProvider;
use crate::state::FavoritesCache;
use crate::views::presenter::{FavoritePresenter, Notifier, ToggleControl};

const MSG_LOGIN_REQUIRED: &str = "Inicia sesión para guardar favoritos";
const MSG_ADDED: &str = "Propiedad agregada a favoritos";
const MSG_REMOVED: &str = "Propiedad eliminada de favoritos";
const MSG_ADD_FAILED: &str = "No se pudo agregar a favoritos";
const MSG_REMOVE_FAILED: &str = "No se pudo quitar de favoritos";
const MSG_NOT_CACHED: &str = "Este favorito no está sincronizado, recarga la página";
const MSG_SESSION_EXPIRED: &str = "Tu sesión expiró, vuelve a iniciar sesión";
const MSG_LOADING: &str = "Cargando favoritos, intenta de nuevo en un momento";

type PendingMap = Rc<RefCell<HashMap<PropertyId, ToggleDirection>>>;

/// Carga de listado en vuelo
///
/// `confirmed` guarda lo que el backend confirmó mientras el GET viajaba:
/// `Some(id)` = alta, `None` = baja.
struct LoadInFlight {
    confirmed: HashMap<PropertyId, Option<FavoriteId>>,
}

/// Controlador de favoritos - una instancia por sesión de página
///
/// Es un handle barato de clonar: todos los clones comparten el mismo cache.
#[derive(Clone)]
pub struct FavoritesController {
    cache: Rc<RefCell<FavoritesCache>>,
    pending: PendingMap,
    loaded: Rc<RefCell<bool>>,
    generation: Rc<RefCell<u64>>,
    load: Rc<RefCell<Option<LoadInFlight>>>,
    gateway: Rc<dyn FavoritesGateway>,
    session: Rc<dyn SessionProvider>,
    presenter: Rc<dyn FavoritePresenter>,
    notifier: Rc<dyn Notifier>,
    logout_delay_ms: u32,
}

impl FavoritesController {
    pub fn new(
        gateway: Rc<dyn FavoritesGateway>,
        session: Rc<dyn SessionProvider>,
        presenter: Rc<dyn FavoritePresenter>,
        notifier: Rc<dyn Notifier>,
        logout_delay_ms: u32,
    ) -> Self {
        Self {
            cache: Rc::new(RefCell::new(FavoritesCache::new())),
            pending: Rc::new(RefCell::new(HashMap::new())),
            loaded: Rc::new(RefCell::new(false)),
            generation: Rc::new(RefCell::new(0)),
            load: Rc::new(RefCell::new(None)),
            gateway,
            session,
            presenter,
            notifier,
            logout_delay_ms,
        }
    }

    /// Carga completa desde el backend (inicial o recarga)
    ///
    /// Sin token el cache queda vacío. Cualquier error también lo vacía,
    /// salvo lo que el backend confirmó durante la carga.
    /// Retorna `true` si el cache quedó cargado.
    pub async fn initialize(&self) -> bool {
        let token = match self.session.token() {
            Some(token) => token,
            None => {
                log::info!("👤 Sin sesión, favoritos no cargados");
                self.clear();
                return false;
            }
        };

        let generation = self.next_generation();
        *self.load.borrow_mut() = Some(LoadInFlight {
            confirmed: HashMap::new(),
        });

        let result = self.gateway.list_favorites(&token).await;

        if *self.generation.borrow() != generation {
            log::debug!("Listado de favoritos obsoleto (generación {}), descartado", generation);
            return false;
        }
        let confirmed = self
            .load
            .borrow_mut()
            .take()
            .map(|load| load.confirmed)
            .unwrap_or_default();

        match result {
            Ok(entries) => {
                let mut fresh = FavoritesCache::new();
                fresh.replace_all(entries);
                self.merge_in_flight(&mut fresh, confirmed);
                *self.cache.borrow_mut() = fresh;
                *self.loaded.borrow_mut() = true;
                log::info!("✅ {} favoritos cargados", self.cache.borrow().len());
                self.refresh_all_presenters();
                true
            }
            Err(e) => {
                log::error!("❌ Error cargando favoritos: {}", e);
                let mut fresh = FavoritesCache::new();
                self.merge_in_flight(&mut fresh, confirmed);
                *self.cache.borrow_mut() = fresh;
                *self.loaded.borrow_mut() = false;
                self.refresh_all_presenters();
                if e.is_auth_rejection() {
                    self.expire_session();
                }
                false
            }
        }
    }

    fn next_generation(&self) -> u64 {
        let mut generation = self.generation.borrow_mut();
        *generation += 1;
        *generation
    }

    /// Lo confirmado durante la carga gana sobre el listado; las propiedades
    /// todavía pendientes conservan su último estado confirmado.
    fn merge_in_flight(&self, fresh: &mut FavoritesCache, confirmed: HashMap<PropertyId, Option<FavoriteId>>) {
        for (property_id, favorite_id) in confirmed {
            match favorite_id {
                Some(favorite_id) => fresh.set(property_id, favorite_id),
                None => {
                    fresh.remove(property_id);
                }
            }
        }
        let current = self.cache.borrow();
        for property_id in self.pending.borrow().keys() {
            match current.get(*property_id) {
                Some(favorite_id) => fresh.set(*property_id, favorite_id),
                None => {
                    fresh.remove(*property_id);
                }
            }
        }
    }

    /// Registrar una confirmación del backend si hay un listado en vuelo
    fn record_confirmed(&self, property_id: PropertyId, favorite_id: Option<FavoriteId>) {
        if let Some(load) = self.load.borrow_mut().as_mut() {
            load.confirmed.insert(property_id, favorite_id);
        }
    }

    /// Primera carga en curso: ninguna propiedad tiene estado confirmado
    pub fn is_first_load_in_flight(&self) -> bool {
        !self.is_loaded() && self.load.borrow().is_some()
    }

    /// Alternar favorito según lo que diga el cache
    pub async fn toggle(&self, property_id: PropertyId, control: Option<&dyn ToggleControl>) -> ToggleOutcome {
        self.toggle_with_notes(property_id, None, control).await
    }

    /// Igual que `toggle`, con notas para el alta
    pub async fn toggle_with_notes(
        &self,
        property_id: PropertyId,
        notes: Option<&str>,
        control: Option<&dyn ToggleControl>,
    ) -> ToggleOutcome {
        let direction = if self.cache.borrow().has(property_id) {
            ToggleDirection::Remove
        } else {
            ToggleDirection::Add
        };
        self.submit(ToggleRequest { property_id, direction }, notes, control).await
    }

    /// Ejecutar una petición con dirección explícita
    pub async fn submit(
        &self,
        request: ToggleRequest,
        notes: Option<&str>,
        control: Option<&dyn ToggleControl>,
    ) -> ToggleOutcome {
        let token = match self.session.token() {
            Some(token) => token,
            None => {
                log::warn!("⚠️ Toggle de favorito sin sesión (propiedad {})", request.property_id);
                self.notifier.notify(NotificationKind::Warning, MSG_LOGIN_REQUIRED);
                return ToggleOutcome::Unauthenticated;
            }
        };

        if self.is_first_load_in_flight() {
            log::warn!("⏳ Toggle de {} durante la carga inicial, ignorado", request.property_id);
            self.notifier.notify(NotificationKind::Info, MSG_LOADING);
            return ToggleOutcome::Loading;
        }

        if self.pending.borrow().contains_key(&request.property_id) {
            log::warn!("⚠️ Propiedad {} ya tiene una petición en vuelo, ignorando", request.property_id);
            return ToggleOutcome::AlreadyPending;
        }

        let _guard = PendingGuard::acquire(self.pending.clone(), request, control);

        match request.direction {
            ToggleDirection::Add => self.add(&token, request.property_id, notes).await,
            ToggleDirection::Remove => self.remove(&token, request.property_id).await,
        }
    }

    async fn add(&self, token: &str, property_id: PropertyId, notes: Option<&str>) -> ToggleOutcome {
        let cached = self.cache.borrow().get(property_id);
        if let Some(existing) = cached {
            log::debug!("Propiedad {} ya es favorita ({}), nada que enviar", property_id, existing);
            self.presenter.set_state(property_id, true);
            return ToggleOutcome::Added(existing);
        }

        match self.gateway.create_favorite(token, property_id, notes).await {
            Ok(favorite_id) => {
                self.cache.borrow_mut().set(property_id, favorite_id);
                self.record_confirmed(property_id, Some(favorite_id));
                log::info!("⭐ Propiedad {} agregada a favoritos ({})", property_id, favorite_id);
                self.presenter.set_state(property_id, true);
                self.presenter.pulse(property_id);
                self.notifier.notify(NotificationKind::Success, MSG_ADDED);
                ToggleOutcome::Added(favorite_id)
            }
            Err(e) => self.handle_failure(property_id, e, MSG_ADD_FAILED),
        }
    }

    async fn remove(&self, token: &str, property_id: PropertyId) -> ToggleOutcome {
        let cached = self.cache.borrow().get(property_id);
        let favorite_id = match cached {
            Some(favorite_id) => favorite_id,
            None => {
                log::error!("❌ Propiedad {} no está en cache, no se puede quitar", property_id);
                self.notifier.notify(NotificationKind::Error, MSG_NOT_CACHED);
                return ToggleOutcome::NotCached;
            }
        };

        match self.gateway.delete_favorite(token, favorite_id).await {
            Ok(()) => {
                self.cache.borrow_mut().remove(property_id);
                self.record_confirmed(property_id, None);
                log::info!("🗑️ Propiedad {} quitada de favoritos", property_id);
                self.presenter.set_state(property_id, false);
                self.notifier.notify(NotificationKind::Success, MSG_REMOVED);
                ToggleOutcome::Removed
            }
            Err(e) => self.handle_failure(property_id, e, MSG_REMOVE_FAILED),
        }
    }

    /// El cache no se toca: vuelve al último estado confirmado
    fn handle_failure(&self, property_id: PropertyId, error: GatewayError, message: &str) -> ToggleOutcome {
        if error.is_auth_rejection() {
            log::warn!("🔒 Sesión rechazada al modificar favorito {}", property_id);
            self.notifier.notify(NotificationKind::Warning, MSG_SESSION_EXPIRED);
            self.expire_session();
            return ToggleOutcome::SessionExpired;
        }

        log::error!("❌ Error en favorito {}: {}", property_id, error);
        self.notifier.notify(NotificationKind::Error, message);
        ToggleOutcome::Failed(error.to_string())
    }

    fn expire_session(&self) {
        self.session.schedule_logout(self.logout_delay_ms);
    }

    /// Re-aplicar el cache a todos los controles (tras re-render o paginación)
    pub fn refresh_all_presenters(&self) {
        let cache = self.cache.borrow();
        for property_id in self.presenter.controls_on_page() {
            self.presenter.set_state(property_id, cache.has(property_id));
        }
    }

    /// Vaciar el cache (fin de sesión) y desmarcar los controles
    ///
    /// Invalida cualquier listado en vuelo.
    pub fn clear(&self) {
        self.next_generation();
        *self.load.borrow_mut() = None;
        self.cache.borrow_mut().clear();
        *self.loaded.borrow_mut() = false;
        self.refresh_all_presenters();
    }

    pub fn is_favorite(&self, property_id: PropertyId) -> bool {
        self.cache.borrow().has(property_id)
    }

    pub fn favorite_id(&self, property_id: PropertyId) -> Option<FavoriteId> {
        self.cache.borrow().get(property_id)
    }

    pub fn is_pending(&self, property_id: PropertyId) -> bool {
        self.pending.borrow().contains_key(&property_id)
    }

    pub fn is_loaded(&self) -> bool {
        *self.loaded.borrow()
    }

    /// Estado observado para una propiedad
    pub fn state_of(&self, property_id: PropertyId) -> FavoriteState {
        match self.pending.borrow().get(&property_id) {
            Some(ToggleDirection::Add) => return FavoriteState::PendingAdd,
            Some(ToggleDirection::Remove) => return FavoriteState::PendingRemove,
            None => {}
        }
        if self.is_favorite(property_id) {
            FavoriteState::Favorited
        } else if self.is_loaded() {
            FavoriteState::NotFavorited
        } else {
            FavoriteState::Unknown
        }
    }

    pub fn stats(&self) -> FavoritesStats {
        let cache = self.cache.borrow();
        FavoritesStats {
            count: cache.len(),
            property_ids: cache.snapshot(),
        }
    }
}

/// Marca la propiedad como pendiente y el control como ocupado;
/// al soltarse (cualquier salida) deshace ambas cosas.
struct PendingGuard<'a> {
    pending: PendingMap,
    property_id: PropertyId,
    control: Option<&'a dyn ToggleControl>,
}

impl<'a> PendingGuard<'a> {
    fn acquire(pending: PendingMap, request: ToggleRequest, control: Option<&'a dyn ToggleControl>) -> Self {
        pending.borrow_mut().insert(request.property_id, request.direction);
        if let Some(control) = control {
            control.set_busy(true);
        }
        Self {
            pending,
            property_id: request.property_id,
            control,
        }
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        self.pending.borrow_mut().remove(&self.property_id);
        if let Some(control) = self.control {
            control.set_busy(false);
        }
    }
}
