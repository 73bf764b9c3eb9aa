//! Pages
//!
//! Top-level page components for each route.

pub mod admin;
pub mod landing;
pub mod login;
pub mod map;
pub mod register;

pub use admin::AdminPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use map::MapPage;
pub use register::RegisterPage;

/// Native confirmation dialog. A missing window (or a blocked dialog)
/// counts as "no".
pub(crate) fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}
