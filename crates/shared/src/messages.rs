//! User-facing strings for the product modal, keyed by locale.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ModalMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    #[default]
    English,
    Spanish,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unsupported locale '{0}' (expected one of: en, es)")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::English),
            "es" | "spanish" | "espanol" | "español" => Ok(Self::Spanish),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

impl Locale {
    pub fn messages(self) -> &'static Messages {
        match self {
            Self::English => &ENGLISH,
            Self::Spanish => &SPANISH,
        }
    }
}

#[derive(Debug)]
pub struct Messages {
    pub id_invalid: &'static str,
    pub title_required: &'static str,
    pub price_required: &'static str,
    pub price_negative: &'static str,
    pub description_required: &'static str,
    pub category_required: &'static str,
    pub image_required: &'static str,

    pub title_label: &'static str,
    pub price_label: &'static str,
    pub description_label: &'static str,
    pub category_label: &'static str,
    pub image_label: &'static str,

    pub create_title: &'static str,
    pub update_title: &'static str,
    pub delete_title: &'static str,

    pub cancel: &'static str,
    pub save: &'static str,
    pub confirm_delete: &'static str,
    /// Shown above the product title in the delete confirmation.
    pub delete_prompt: &'static str,

    pub product_created: &'static str,
    pub product_updated: &'static str,
    pub product_deleted: &'static str,
    pub generic_failure: &'static str,
}

impl Messages {
    pub fn modal_title(&self, mode: ModalMode) -> &'static str {
        match mode {
            ModalMode::Create => self.create_title,
            ModalMode::Update => self.update_title,
            ModalMode::Delete => self.delete_title,
        }
    }
}

pub static ENGLISH: Messages = Messages {
    id_invalid: "Id must be a non-negative integer",
    title_required: "Title is required",
    price_required: "Price is required",
    price_negative: "Price must be greater than or equal to 0",
    description_required: "Description is required",
    category_required: "Category is required",
    image_required: "Image URL is required",

    title_label: "Title",
    price_label: "Price",
    description_label: "Description",
    category_label: "Category",
    image_label: "Image URL",

    create_title: "New product",
    update_title: "Edit product",
    delete_title: "Delete product",

    cancel: "Cancel",
    save: "Save",
    confirm_delete: "Delete",
    delete_prompt: "Are you sure you want to delete the product",

    product_created: "Product created",
    product_updated: "Product updated",
    product_deleted: "Product deleted",
    generic_failure: "An error has occurred",
};

pub static SPANISH: Messages = Messages {
    id_invalid: "El id debe ser un entero positivo",
    title_required: "El titulo es requerido",
    price_required: "El precio es requerido",
    price_negative: "El precio debe ser mayor o igual a 0",
    description_required: "La descripcion es requerida",
    category_required: "La categoria es requerida",
    image_required: "La URL de la imagen es requerida",

    title_label: "Titulo",
    price_label: "Precio",
    description_label: "Descripcion",
    category_label: "Categoria",
    image_label: "URL de la imagen",

    create_title: "Nuevo producto",
    update_title: "Editar producto",
    delete_title: "Eliminar producto",

    cancel: "Cancelar",
    save: "Guardar",
    confirm_delete: "Eliminar",
    delete_prompt: "¿Está seguro que desea eliminar el producto",

    product_created: "Producto Creado",
    product_updated: "Producto Actualizado",
    product_deleted: "Producto borrado",
    generic_failure: "Ha ocurrido un error",
};

#[cfg(test)]
#[path = "tests/messages_tests.rs"]
mod tests;
