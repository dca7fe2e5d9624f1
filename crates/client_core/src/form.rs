//! Local form state for a single product: values, errors and touched fields.

use std::collections::BTreeSet;

use shared::{
    domain::Product,
    messages::Messages,
    validation::{validate, FieldErrors, FormValues, ProductField},
};

#[derive(Debug, Clone)]
pub struct FormState {
    values: FormValues,
    errors: FieldErrors,
    touched: BTreeSet<ProductField>,
    messages: &'static Messages,
}

impl FormState {
    /// Seeds the form from `product` and validates immediately, so an
    /// incomplete seed starts with submit disabled.
    pub fn new(product: &Product, messages: &'static Messages) -> Self {
        let values = FormValues::from_product(product);
        let errors = validate(&values, messages);
        Self {
            values,
            errors,
            touched: BTreeSet::new(),
            messages,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn is_touched(&self, field: ProductField) -> bool {
        self.touched.contains(&field)
    }

    /// Error to render next to `field`; hidden until the field is touched.
    pub fn visible_error(&self, field: ProductField) -> Option<&'static str> {
        if self.is_touched(field) {
            self.errors.get(field)
        } else {
            None
        }
    }

    pub fn change(&mut self, field: ProductField, value: impl Into<String>) {
        self.values.set(field, value);
        self.revalidate();
    }

    pub fn blur(&mut self, field: ProductField) {
        self.touched.insert(field);
        self.revalidate();
    }

    /// Touches every field and yields the product to persist, or the current
    /// errors when any field fails.
    pub fn submit_guard(&mut self) -> Result<Product, FieldErrors> {
        self.touched.extend(ProductField::ALL);
        self.revalidate();
        match self.values.to_product() {
            Some(product) if self.errors.is_empty() => Ok(product),
            _ => Err(self.errors.clone()),
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate(&self.values, self.messages);
    }
}

#[cfg(test)]
#[path = "tests/form_tests.rs"]
mod tests;
