//! UI layer: product list shell, modal window and toasts.

pub mod app;
pub mod modal_window;
pub mod toasts;

pub use app::ProductAdminApp;
