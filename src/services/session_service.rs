// ============================================================================
// SESSION SERVICE - Token de sesión y cierre diferido
// ============================================================================

/// Proveedor del token de perfil/autenticación
pub trait SessionProvider {
    /// Token bearer actual, `None` si el usuario no inició sesión
    fn token(&self) -> Option<String>;

    /// Cerrar sesión después de `delay_ms` (deja ver la notificación)
    fn schedule_logout(&self, delay_ms: u32);
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserSession;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::Cell;
    use std::rc::Rc;
    use gloo_timers::callback::Timeout;
    use super::SessionProvider;
    use crate::config::CONFIG;
    use crate::utils::constants::USER_STORAGE_KEY;
    use crate::utils::storage::{load_raw, remove_from_storage};

    /// Sesión respaldada por localStorage
    #[derive(Clone)]
    pub struct BrowserSession {
        token_key: String,
        login_url: String,
        logout_scheduled: Rc<Cell<bool>>,
    }

    impl BrowserSession {
        pub fn new() -> Self {
            Self {
                token_key: CONFIG.auth_token_key.clone(),
                login_url: CONFIG.login_url.clone(),
                logout_scheduled: Rc::new(Cell::new(false)),
            }
        }

        /// Borrar credenciales y volver al login
        pub fn logout_now(&self) {
            log::info!("🔒 Cerrando sesión");
            if let Err(e) = remove_from_storage(&self.token_key) {
                log::error!("❌ Error borrando token: {}", e);
            }
            if let Err(e) = remove_from_storage(USER_STORAGE_KEY) {
                log::error!("❌ Error borrando usuario: {}", e);
            }
            if let Some(win) = web_sys::window() {
                if let Err(e) = win.location().set_href(&self.login_url) {
                    log::error!("❌ Error redirigiendo al login: {:?}", e);
                }
            }
        }
    }

    impl Default for BrowserSession {
        fn default() -> Self {
            Self::new()
        }
    }

    impl SessionProvider for BrowserSession {
        fn token(&self) -> Option<String> {
            load_raw(&self.token_key)
        }

        fn schedule_logout(&self, delay_ms: u32) {
            // Varios 401 seguidos no deben apilar redirecciones
            if self.logout_scheduled.replace(true) {
                log::warn!("⚠️ Logout ya programado, ignorando");
                return;
            }
            log::warn!("⏰ Sesión expirada, logout en {} ms", delay_ms);
            let session = self.clone();
            Timeout::new(delay_ms, move || session.logout_now()).forget();
        }
    }
}
