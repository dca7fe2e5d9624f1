//! Client-side product modal: REST persistence, notifications, form state
//! and the modal controller hosts embed.

pub mod config;
pub mod error;
pub mod form;
pub mod modal;
pub mod notify;
pub mod service;

pub use config::{ClientSettings, SettingsError};
pub use error::ServiceError;
pub use form::FormState;
pub use modal::{
    FieldView, ModalHost, ModalProps, ModalView, Mutation, PersistenceInvoker, ProductModal,
};
pub use notify::{Notifier, Toast, ToastKind, ToastPosition, ToastQueue, TracingNotifier};
pub use service::{HttpProductService, ProductService};
