// ============================================================================
// APP - Punto de entrada WASM y API expuesta a los scripts de la página
// ============================================================================
// El controlador se construye UNA vez aquí y se pasa por referencia a quien
// lo necesite. El thread_local solo existe para la frontera con JavaScript.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use crate::config::CONFIG;
use crate::dom::{install_favorites_delegation, DomFavoritePresenter};
use crate::services::{ApiClient, BrowserSession};
use crate::viewmodels::FavoritesController;
use crate::views::ToastNotifier;

thread_local! {
    static CONTROLLER: RefCell<Option<FavoritesController>> = RefCell::new(None);
}

fn with_controller<T>(default: T, f: impl FnOnce(&FavoritesController) -> T) -> T {
    CONTROLLER.with(|cell| match cell.borrow().as_ref() {
        Some(controller) => f(controller),
        None => {
            log::warn!("⚠️ Controlador de favoritos no inicializado");
            default
        }
    })
}

fn build_controller() -> FavoritesController {
    FavoritesController::new(
        Rc::new(ApiClient::new()),
        Rc::new(BrowserSession::new()),
        Rc::new(DomFavoritePresenter::new()),
        Rc::new(ToastNotifier::new()),
        CONFIG.logout_delay_ms,
    )
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    // Inicializar panic hook para mejor debugging
    console_error_panic_hook::set_once();

    // Inicializar logging
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Favoritos - Rust Puro ({})", CONFIG.environment);

    let controller = build_controller();
    install_favorites_delegation(controller.clone())?;

    CONTROLLER.with(|cell| {
        *cell.borrow_mut() = Some(controller.clone());
    });

    spawn_local(async move {
        controller.initialize().await;
    });

    Ok(())
}

/// Re-aplicar el estado a los controles (llamar después de re-renderizar)
#[wasm_bindgen]
pub fn refresh_favorites() {
    with_controller((), |controller| controller.refresh_all_presenters());
}

/// Volver a cargar la lista completa desde el backend
#[wasm_bindgen]
pub fn reload_favorites() {
    if let Some(controller) = with_controller(None, |controller| Some(controller.clone())) {
        spawn_local(async move {
            controller.initialize().await;
        });
    }
}

#[wasm_bindgen]
pub fn is_favorite(property_id: u32) -> bool {
    with_controller(false, |controller| controller.is_favorite(i64::from(property_id)))
}

#[wasm_bindgen]
pub fn favorites_count() -> u32 {
    with_controller(0, |controller| controller.stats().count as u32)
}

#[wasm_bindgen]
pub fn favorite_property_ids() -> js_sys::Array {
    with_controller(js_sys::Array::new(), |controller| {
        controller
            .stats()
            .property_ids
            .into_iter()
            .map(|id| JsValue::from_f64(id as f64))
            .collect()
    })
}

/// Fin de sesión: vaciar el cache y desmarcar los controles
#[wasm_bindgen]
pub fn reset_favorites() {
    with_controller((), |controller| controller.clear());
}
