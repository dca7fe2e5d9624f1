//! Backend commands queued from UI to backend worker.

use shared::domain::{Product, ProductId};

/// Identifies one opened product modal so late results only close the modal
/// that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalId(pub u64);

#[derive(Debug, Clone)]
pub enum BackendCommand {
    ListProducts,
    SaveProduct { modal: ModalId, product: Product },
    DeleteProduct { modal: ModalId, id: ProductId },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ListProducts => "list_products",
            Self::SaveProduct { .. } => "save_product",
            Self::DeleteProduct { .. } => "delete_product",
        }
    }
}
