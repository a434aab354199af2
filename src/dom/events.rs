// ============================================================================
// EVENT HANDLING - Delegación de clicks de favoritos
// ============================================================================
// Un solo listener en `document`: los botones que aparecen después
// (paginación, cambio de pestaña) funcionan sin volver a registrar nada.
// Es un listener global, así que se registra UNA VEZ (flag) y se usa
// closure.forget() para mantenerlo vivo toda la vida de la página.
// El controlador vive aparte: volver a instalar solo cambia a quién se
// despacha, nunca agrega otro listener.
// ============================================================================

use std::cell::{Cell, RefCell};
use wasm_bindgen::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, MouseEvent};
use crate::dom::document;
use crate::dom::favorite_presenter::ElementControl;
use crate::models::{parse_property_id, PropertyId};
use crate::utils::constants::{FAVORITE_ATTR, FAVORITE_NOTES_ATTR, FAVORITE_SELECTOR};
use crate::viewmodels::FavoritesController;

thread_local! {
    static DELEGATION_INSTALLED: Cell<bool> = Cell::new(false);
    static DELEGATE: RefCell<Option<FavoritesController>> = RefCell::new(None);
}

/// Buscar el control de favorito más cercano al target del click
pub fn favorite_control_from_event(event: &MouseEvent) -> Option<(Element, PropertyId)> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let control = target.closest(FAVORITE_SELECTOR).ok()??;
    let raw = control.get_attribute(FAVORITE_ATTR)?;
    match parse_property_id(&raw) {
        Some(property_id) => Some((control, property_id)),
        None => {
            log::warn!("⚠️ Control de favorito con id inválido: '{}'", raw);
            None
        }
    }
}

/// Registrar el listener delegado (idempotente)
///
/// Llamadas repetidas solo reemplazan el controlador que recibe los clicks.
pub fn install_favorites_delegation(controller: FavoritesController) -> Result<(), JsValue> {
    DELEGATE.with(|slot| *slot.borrow_mut() = Some(controller));

    if DELEGATION_INSTALLED.with(|installed| installed.replace(true)) {
        log::warn!("⚠️ Delegación de favoritos ya instalada, no se agrega otro listener");
        return Ok(());
    }

    let document = document().ok_or_else(|| JsValue::from_str("No document"))?;

    let closure = Closure::wrap(Box::new(move |event: MouseEvent| {
        let (control, property_id) = match favorite_control_from_event(&event) {
            Some(found) => found,
            None => return,
        };
        event.prevent_default();
        event.stop_propagation();

        // Deshabilitado = ya tiene una petición en vuelo
        if control.has_attribute("disabled") {
            return;
        }

        let controller = match DELEGATE.with(|slot| slot.borrow().clone()) {
            Some(controller) => controller,
            None => return,
        };
        let notes = control.get_attribute(FAVORITE_NOTES_ATTR);
        spawn_local(async move {
            let handle = ElementControl::new(control);
            let outcome = controller
                .toggle_with_notes(property_id, notes.as_deref(), Some(&handle))
                .await;
            log::debug!("Toggle de favorito {} -> {:?}", property_id, outcome);
        });
    }) as Box<dyn FnMut(MouseEvent)>);

    if let Err(e) = document.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref()) {
        DELEGATION_INSTALLED.with(|installed| installed.set(false));
        return Err(e);
    }
    closure.forget();

    log::info!("✅ Delegación de favoritos registrada (solo una vez)");
    Ok(())
}
