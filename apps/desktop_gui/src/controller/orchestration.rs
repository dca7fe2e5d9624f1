//! Command orchestration helpers from UI actions to backend command queue.

use client_core::ProductModal;
use crossbeam_channel::{Sender, TrySendError};
use shared::validation::ProductField;

use crate::backend_bridge::commands::{BackendCommand, ModalId};

/// What the user did inside the product modal during one frame.
#[derive(Debug, Clone, PartialEq)]
pub enum ModalAction {
    Change(ProductField, String),
    Blur(ProductField),
    Cancel,
    Submit,
    ConfirmDelete,
}

pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
    status: &mut String,
) {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(command = cmd_name, "queued ui->backend command"),
        Err(TrySendError::Full(_)) => {
            *status = "UI command queue is full; please retry".to_string();
        }
        Err(TrySendError::Disconnected(_)) => {
            *status =
                "Backend command processor disconnected (possible startup/runtime failure); restart the app"
                    .to_string();
        }
    }
}

/// The modal currently shown by the app, tagged with the id its host and
/// backend commands carry.
pub struct OpenModal {
    pub id: ModalId,
    pub modal: ProductModal,
}

/// Feeds modal actions into the controller and returns the backend work they
/// produced. Invalid submits and wrong-mode actions produce nothing.
pub fn apply_modal_actions(
    open: &mut OpenModal,
    actions: Vec<ModalAction>,
) -> Vec<BackendCommand> {
    let OpenModal { id, modal } = open;
    let id = *id;
    let mut commands = Vec::new();
    for action in actions {
        match action {
            ModalAction::Change(field, value) => modal.change(field, value),
            ModalAction::Blur(field) => modal.blur(field),
            ModalAction::Cancel => modal.cancel(),
            ModalAction::Submit => {
                if let Some(product) = modal.submit_request() {
                    commands.push(BackendCommand::SaveProduct { modal: id, product });
                }
            }
            ModalAction::ConfirmDelete => {
                if let Some(product_id) = modal.delete_request() {
                    commands.push(BackendCommand::DeleteProduct {
                        modal: id,
                        id: product_id,
                    });
                }
            }
        }
    }
    commands
}

/// Drops the open modal when `closed` names it. Closes reported for a modal
/// that is no longer shown are ignored; returns whether anything closed.
pub fn close_modal(open: &mut Option<OpenModal>, closed: ModalId) -> bool {
    let Some(current) = open.as_ref() else {
        return false;
    };
    if current.id != closed {
        tracing::debug!(
            closed = closed.0,
            open = current.id.0,
            "ignoring close for stale modal"
        );
        return false;
    }
    *open = None;
    true
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
