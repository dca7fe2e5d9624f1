//! Modal host and notifier capabilities that report back to the UI thread.

use client_core::{ModalHost, Notifier, ToastKind};
use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::ModalId;
use crate::controller::events::UiEvent;

fn forward(ui_tx: &Sender<UiEvent>, event: UiEvent, what: &'static str) {
    match ui_tx.try_send(event) {
        Ok(()) => {}
        Err(TrySendError::Full(_)) => {
            tracing::warn!(event = what, "UI event queue is full; dropping event");
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(event = what, "UI event queue disconnected; dropping event");
        }
    }
}

/// Host for a single opened modal; closes name that modal only.
#[derive(Clone)]
pub struct ChannelHost {
    ui_tx: Sender<UiEvent>,
    modal: ModalId,
}

impl ChannelHost {
    pub fn new(ui_tx: Sender<UiEvent>, modal: ModalId) -> Self {
        Self { ui_tx, modal }
    }
}

impl ModalHost for ChannelHost {
    fn close(&self) {
        forward(&self.ui_tx, UiEvent::ModalClosed(self.modal), "modal_closed");
    }

    fn notify_changed(&self) {
        forward(&self.ui_tx, UiEvent::ProductsChanged, "products_changed");
    }
}

#[derive(Clone)]
pub struct ChannelNotifier {
    ui_tx: Sender<UiEvent>,
}

impl ChannelNotifier {
    pub fn new(ui_tx: Sender<UiEvent>) -> Self {
        Self { ui_tx }
    }

    fn send(&self, kind: ToastKind, message: &str) {
        let event = UiEvent::Notify {
            kind,
            message: message.to_string(),
        };
        forward(&self.ui_tx, event, "notify");
    }
}

impl Notifier for ChannelNotifier {
    fn success(&self, message: &str) {
        self.send(ToastKind::Success, message);
    }

    fn error(&self, message: &str) {
        self.send(ToastKind::Error, message);
    }
}
