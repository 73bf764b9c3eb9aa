//! UI Components
//!
//! Reusable Leptos components for the map screen and shared chrome.

pub mod chat_panel;
pub mod loading;
pub mod map_view;
pub mod report_modal;
pub mod toast;

pub use chat_panel::ChatPanel;
pub use loading::Loading;
pub use map_view::MapView;
pub use report_modal::ReportModal;
pub use toast::Toast;
