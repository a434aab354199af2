// ============================================================================
// VIEWS MODULE - Presentación (traits + implementaciones DOM)
// ============================================================================

pub mod presenter;

#[cfg(target_arch = "wasm32")]
pub mod toast;

pub use presenter::{FavoritePresenter, Notifier, ToggleControl};

#[cfg(target_arch = "wasm32")]
pub use toast::ToastNotifier;
