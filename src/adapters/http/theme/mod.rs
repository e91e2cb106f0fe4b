//! HTTP adapter for the dark/light theme preference.

mod dto;
mod handlers;
mod routes;

pub use dto::{SetThemeRequest, ThemeResponse};
pub use handlers::ThemeAppState;
pub use routes::theme_routes;
