pub mod favorites_viewmodel;

pub use favorites_viewmodel::FavoritesController;
