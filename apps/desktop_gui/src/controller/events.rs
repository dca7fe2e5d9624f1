//! UI/backend events and error modeling for desktop GUI controller.

use client_core::{ServiceError, ToastKind};
use shared::domain::Product;

use crate::backend_bridge::commands::ModalId;

pub enum UiEvent {
    ProductsLoaded(Vec<Product>),
    Notify { kind: ToastKind, message: String },
    ModalClosed(ModalId),
    ProductsChanged,
    Error(UiError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorCategory {
    Transport,
    Backend,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiErrorContext {
    BackendStartup,
    LoadProducts,
}

#[derive(Debug, Clone)]
pub struct UiError {
    category: UiErrorCategory,
    context: UiErrorContext,
    message: String,
}

impl UiError {
    pub fn from_message(context: UiErrorContext, message: impl Into<String>) -> Self {
        let message = message.into();
        let message_lower = message.to_ascii_lowercase();
        let category = if message_lower.contains("timeout")
            || message_lower.contains("timed out")
            || message_lower.contains("connection")
            || message_lower.contains("dns")
            || message_lower.contains("unreachable")
        {
            UiErrorCategory::Transport
        } else {
            UiErrorCategory::Unknown
        };

        Self {
            category,
            context,
            message,
        }
    }

    pub fn from_service(context: UiErrorContext, err: &ServiceError) -> Self {
        let category = match err {
            ServiceError::Http { .. } => UiErrorCategory::Transport,
            ServiceError::Status { .. } | ServiceError::Decode { .. } => UiErrorCategory::Backend,
        };
        Self {
            category,
            context,
            message: err.to_string(),
        }
    }

    /// One-line status text for the top bar.
    pub fn status_line(&self) -> String {
        let what = match self.context {
            UiErrorContext::BackendStartup => "Backend worker failed to start",
            UiErrorContext::LoadProducts => "Could not load products",
        };
        let hint = match self.category {
            UiErrorCategory::Transport => "; check the API URL/network and reload",
            UiErrorCategory::Backend | UiErrorCategory::Unknown => "",
        };
        format!("{what}: {}{hint}", self.message)
    }
}

#[cfg(test)]
#[path = "../tests/events_tests.rs"]
mod tests;
