//! Field-level validation policy for product forms.
//!
//! [`validate`] is a pure function from the current form values to the set of
//! fields that fail, each paired with the message to display. It is evaluated
//! on every change and blur; there are no cross-field rules.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{
    domain::{Product, ProductId},
    messages::Messages,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductField {
    Id,
    Title,
    Price,
    Description,
    Category,
    Image,
}

impl ProductField {
    pub const ALL: [ProductField; 6] = [
        ProductField::Id,
        ProductField::Title,
        ProductField::Price,
        ProductField::Description,
        ProductField::Category,
        ProductField::Image,
    ];

    /// Fields the user can edit; `id` is carried along but never rendered.
    pub const EDITABLE: [ProductField; 5] = [
        ProductField::Title,
        ProductField::Price,
        ProductField::Description,
        ProductField::Category,
        ProductField::Image,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => "title",
            Self::Price => "price",
            Self::Description => "description",
            Self::Category => "category",
            Self::Image => "image",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    pub fn label(self, messages: &Messages) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Title => messages.title_label,
            Self::Price => messages.price_label,
            Self::Description => messages.description_label,
            Self::Category => messages.category_label,
            Self::Image => messages.image_label,
        }
    }
}

/// Editable representation of a [`Product`].
///
/// `price` keeps the raw text typed by the user so that an empty or
/// non-numeric entry is reported instead of being coerced to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormValues {
    pub id: ProductId,
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: String,
    pub image: String,
}

impl FormValues {
    pub fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            title: product.title.clone(),
            price: product.price.to_string(),
            description: product.description.clone(),
            category: product.category.clone(),
            image: product.image.clone(),
        }
    }

    pub fn get(&self, field: ProductField) -> String {
        match field {
            ProductField::Id => self.id.to_string(),
            ProductField::Title => self.title.clone(),
            ProductField::Price => self.price.clone(),
            ProductField::Description => self.description.clone(),
            ProductField::Category => self.category.clone(),
            ProductField::Image => self.image.clone(),
        }
    }

    /// Writes one field from its text form. An unparseable id is stored as
    /// `-1` so the structural id rule rejects it.
    pub fn set(&mut self, field: ProductField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ProductField::Id => self.id = ProductId(value.trim().parse().unwrap_or(-1)),
            ProductField::Title => self.title = value,
            ProductField::Price => self.price = value,
            ProductField::Description => self.description = value,
            ProductField::Category => self.category = value,
            ProductField::Image => self.image = value,
        }
    }

    pub fn parsed_price(&self) -> Option<f64> {
        self.price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
    }

    /// Builds the product to submit; `None` while the price is not a number.
    pub fn to_product(&self) -> Option<Product> {
        Some(Product {
            id: self.id,
            title: self.title.clone(),
            price: self.parsed_price()?,
            description: self.description.clone(),
            category: self.category.clone(),
            image: self.image.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldErrors(BTreeMap<ProductField, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: ProductField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: ProductField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ProductField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }

    fn insert(&mut self, field: ProductField, message: &'static str) {
        self.0.insert(field, message);
    }
}

pub fn validate(values: &FormValues, messages: &Messages) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if values.id.0 < 0 {
        errors.insert(ProductField::Id, messages.id_invalid);
    }
    if values.title.is_empty() {
        errors.insert(ProductField::Title, messages.title_required);
    }
    match values.parsed_price() {
        None => errors.insert(ProductField::Price, messages.price_required),
        Some(price) if price < 0.0 => errors.insert(ProductField::Price, messages.price_negative),
        Some(_) => {}
    }
    if values.description.is_empty() {
        errors.insert(ProductField::Description, messages.description_required);
    }
    if values.category.is_empty() {
        errors.insert(ProductField::Category, messages.category_required);
    }
    if values.image.is_empty() {
        errors.insert(ProductField::Image, messages.image_required);
    }

    errors
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
