use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ProductId);

impl ProductId {
    /// Sentinel for a product the backend has not assigned an identity to yet.
    pub const NEW: ProductId = ProductId(0);

    pub fn is_new(self) -> bool {
        self == Self::NEW
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Product {
    #[serde(default)]
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl Product {
    /// Blank record used to seed the modal in create mode.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_new(&self) -> bool {
        self.id.is_new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModalMode {
    Create,
    Update,
    Delete,
}

impl ModalMode {
    pub fn is_delete(self) -> bool {
        matches!(self, Self::Delete)
    }
}
