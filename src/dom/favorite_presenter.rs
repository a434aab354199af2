// ============================================================================
// FAVORITE PRESENTER (DOM) - Refleja el cache en los botones de favorito
// ============================================================================
// Sin estado propio: busca los controles en el documento cada vez, así
// funciona igual después de una paginación o un re-render.
// ============================================================================

use std::collections::BTreeSet;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::Element;
use crate::dom::{add_class, query_selector_all, remove_attribute, remove_class, set_attribute, toggle_class};
use crate::models::{parse_property_id, PropertyId};
use crate::utils::constants::{
    FAVORITED_CLASS, FAVORITE_ATTR, FAVORITE_SELECTOR, LOADING_CLASS, PULSE_CLASS,
    PULSE_DURATION_MS, TITLE_ADD, TITLE_REMOVE,
};
use crate::views::presenter::{FavoritePresenter, ToggleControl};

#[derive(Clone, Default)]
pub struct DomFavoritePresenter;

impl DomFavoritePresenter {
    pub fn new() -> Self {
        Self
    }

    /// Todos los controles cuyo atributo se lee como `property_id`
    /// (mismo parseo que `controls_on_page`, así " 42" y "042" también cuentan)
    fn controls_for(property_id: PropertyId) -> Vec<Element> {
        let controls = query_selector_all(FAVORITE_SELECTOR).unwrap_or_else(|e| {
            log::error!("❌ Error buscando controles de {}: {:?}", property_id, e);
            Vec::new()
        });
        controls
            .into_iter()
            .filter(|control| {
                control
                    .get_attribute(FAVORITE_ATTR)
                    .and_then(|raw| parse_property_id(&raw))
                    == Some(property_id)
            })
            .collect()
    }
}

/// Aplicar el estado visual a un control
pub fn apply_favorite_state(control: &Element, is_favorite: bool) -> Result<(), JsValue> {
    toggle_class(control, FAVORITED_CLASS, is_favorite)?;
    let label = if is_favorite { TITLE_REMOVE } else { TITLE_ADD };
    set_attribute(control, "aria-pressed", if is_favorite { "true" } else { "false" })?;
    set_attribute(control, "title", label)?;
    set_attribute(control, "aria-label", label)
}

impl FavoritePresenter for DomFavoritePresenter {
    fn set_state(&self, property_id: PropertyId, is_favorite: bool) {
        for control in Self::controls_for(property_id) {
            if let Err(e) = apply_favorite_state(&control, is_favorite) {
                log::error!("❌ Error actualizando control {}: {:?}", property_id, e);
            }
        }
    }

    fn pulse(&self, property_id: PropertyId) {
        for control in Self::controls_for(property_id) {
            if add_class(&control, PULSE_CLASS).is_err() {
                continue;
            }
            Timeout::new(PULSE_DURATION_MS, move || {
                let _ = remove_class(&control, PULSE_CLASS);
            })
            .forget();
        }
    }

    fn controls_on_page(&self) -> Vec<PropertyId> {
        let controls = match query_selector_all(FAVORITE_SELECTOR) {
            Ok(controls) => controls,
            Err(e) => {
                log::error!("❌ Error buscando controles de favorito: {:?}", e);
                return Vec::new();
            }
        };
        let ids: BTreeSet<PropertyId> = controls
            .iter()
            .filter_map(|control| control.get_attribute(FAVORITE_ATTR))
            .filter_map(|raw| parse_property_id(&raw))
            .collect();
        ids.into_iter().collect()
    }
}

/// Botón que originó el click
pub struct ElementControl {
    element: Element,
}

impl ElementControl {
    pub fn new(element: Element) -> Self {
        Self { element }
    }
}

impl ToggleControl for ElementControl {
    fn set_busy(&self, busy: bool) {
        let result = if busy {
            set_attribute(&self.element, "disabled", "")
                .and_then(|_| set_attribute(&self.element, "aria-busy", "true"))
                .and_then(|_| add_class(&self.element, LOADING_CLASS))
        } else {
            remove_attribute(&self.element, "disabled")
                .and_then(|_| remove_attribute(&self.element, "aria-busy"))
                .and_then(|_| remove_class(&self.element, LOADING_CLASS))
        };
        if let Err(e) = result {
            log::error!("❌ Error cambiando estado del control: {:?}", e);
        }
    }
}
