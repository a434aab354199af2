/// Atributo que marca un control de favorito en el markup
pub const FAVORITE_ATTR: &str = "data-favorite-property";

/// Selector CSS de todos los controles de favorito
pub const FAVORITE_SELECTOR: &str = "[data-favorite-property]";

/// Notas opcionales que se envían al crear el favorito
pub const FAVORITE_NOTES_ATTR: &str = "data-favorite-notes";

/// Clase de estado "favorito"
pub const FAVORITED_CLASS: &str = "favorited";

/// Clase de animación de confirmación
pub const PULSE_CLASS: &str = "favorite-pulse";

/// Clase mientras el control espera respuesta del backend
pub const LOADING_CLASS: &str = "is-loading";

/// Duración del pulse (ms)
pub const PULSE_DURATION_MS: u32 = 600;

pub const TITLE_ADD: &str = "Agregar a favoritos";
pub const TITLE_REMOVE: &str = "Quitar de favoritos";

/// Contenedor de toasts (se crea si no existe)
pub const TOAST_CONTAINER_ID: &str = "toast-container";

/// Clave de localStorage con los datos del usuario (se borra en logout)
pub const USER_STORAGE_KEY: &str = "userData";
