// ============================================================================
// PRESENTER TRAITS - Lo que el controlador necesita de la vista
// ============================================================================

use crate::models::{NotificationKind, PropertyId};

/// Refleja el estado del cache en los controles visibles
pub trait FavoritePresenter {
    /// Marcar/desmarcar todos los controles de la propiedad (no-op si no hay)
    fn set_state(&self, property_id: PropertyId, is_favorite: bool);

    /// Animación de confirmación, se quita sola
    fn pulse(&self, property_id: PropertyId);

    /// Ids de todos los controles de favorito renderizados ahora mismo
    fn controls_on_page(&self) -> Vec<PropertyId>;
}

/// Notificaciones transitorias (nunca un diálogo bloqueante)
pub trait Notifier {
    fn notify(&self, kind: NotificationKind, message: &str);
}

/// Control que originó el toggle
pub trait ToggleControl {
    fn set_busy(&self, busy: bool);
}
