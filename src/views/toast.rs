// ============================================================================
// TOAST VIEW - Notificaciones transitorias
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, document, get_element_by_id, ElementBuilder};
use crate::models::NotificationKind;
use crate::utils::constants::TOAST_CONTAINER_ID;
use crate::views::presenter::Notifier;

#[derive(Clone)]
pub struct ToastNotifier {
    duration_ms: u32,
}

impl ToastNotifier {
    pub fn new() -> Self {
        Self {
            duration_ms: CONFIG.toast_duration_ms,
        }
    }

    /// Contenedor de toasts, se crea en `<body>` si no existe
    fn container() -> Result<Element, JsValue> {
        if let Some(container) = get_element_by_id(TOAST_CONTAINER_ID) {
            return Ok(container);
        }
        let body = document()
            .and_then(|doc| doc.body())
            .ok_or_else(|| JsValue::from_str("No body"))?;
        let container = ElementBuilder::new("div")?
            .id(TOAST_CONTAINER_ID)
            .class("toast-container")
            .attr("aria-live", "polite")?
            .build();
        append_child(&body, &container)?;
        Ok(container)
    }

    /// Renderizar toast y programar su eliminación
    pub fn render_toast(&self, kind: NotificationKind, message: &str) -> Result<Element, JsValue> {
        let container = Self::container()?;
        let toast = ElementBuilder::new("div")?
            .class(&format!("toast toast--{}", kind.css_suffix()))
            .attr("role", "status")?
            .text(message)
            .build();
        append_child(&container, &toast)?;

        let to_remove = toast.clone();
        Timeout::new(self.duration_ms, move || to_remove.remove()).forget();
        Ok(toast)
    }
}

impl Default for ToastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for ToastNotifier {
    fn notify(&self, kind: NotificationKind, message: &str) {
        if let Err(e) = self.render_toast(kind, message) {
            log::error!("❌ Error mostrando notificación '{}': {:?}", message, e);
        }
    }
}
