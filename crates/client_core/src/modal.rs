//! The product modal: view selection, form wiring and persistence.
//!
//! A [`ProductModal`] is opened by a parent view with a fixed [`ModalMode`].
//! Delete mode renders a confirmation; create and update share the form
//! view and are told apart only by whether the product id is the `0`
//! sentinel when the form is submitted. Effects on the parent (closing the
//! modal, asking it to reload its list) go through [`ModalHost`], and user
//! notifications through [`Notifier`].

use std::sync::Arc;

use shared::{
    domain::{ModalMode, Product, ProductId},
    messages::{Locale, Messages},
    validation::ProductField,
};
use tracing::{error, info};

use crate::{error::ServiceError, form::FormState, notify::Notifier, service::ProductService};

/// Parent-side capabilities handed to the modal when it is opened.
pub trait ModalHost: Send + Sync {
    fn close(&self);
    /// Tells the parent its product list is stale.
    fn notify_changed(&self);
}

pub struct ModalProps {
    pub show: bool,
    pub title: String,
    pub mode: ModalMode,
    pub product: Product,
    pub host: Arc<dyn ModalHost>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub field: ProductField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ModalView {
    Hidden,
    DeleteConfirmation {
        title: String,
        prompt: &'static str,
        product_title: String,
        cancel_label: &'static str,
        confirm_label: &'static str,
    },
    Form {
        title: String,
        fields: Vec<FieldView>,
        cancel_label: &'static str,
        submit_label: &'static str,
        submit_enabled: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    Updated,
    Deleted,
}

/// Runs one persistence call and reports the outcome to the user and host.
///
/// Failures are logged and turned into the generic error notification; the
/// host is left untouched so the modal stays open for a retry. The error is
/// still returned for callers that want it.
pub struct PersistenceInvoker {
    service: Arc<dyn ProductService>,
    notifier: Arc<dyn Notifier>,
    messages: &'static Messages,
}

impl PersistenceInvoker {
    pub fn new(
        service: Arc<dyn ProductService>,
        notifier: Arc<dyn Notifier>,
        locale: Locale,
    ) -> Self {
        Self {
            service,
            notifier,
            messages: locale.messages(),
        }
    }

    pub async fn save(
        &self,
        product: &Product,
        host: &dyn ModalHost,
    ) -> Result<Mutation, ServiceError> {
        let result = if product.is_new() {
            self.service
                .create_product(product)
                .await
                .map(|_| Mutation::Created)
        } else {
            self.service
                .update_product(product.id, product)
                .await
                .map(|_| Mutation::Updated)
        };
        self.finish(result, host)
    }

    pub async fn delete(
        &self,
        id: ProductId,
        host: &dyn ModalHost,
    ) -> Result<Mutation, ServiceError> {
        let result = self
            .service
            .delete_product(id)
            .await
            .map(|()| Mutation::Deleted);
        self.finish(result, host)
    }

    fn finish(
        &self,
        result: Result<Mutation, ServiceError>,
        host: &dyn ModalHost,
    ) -> Result<Mutation, ServiceError> {
        match &result {
            Ok(mutation) => {
                info!(?mutation, "product mutation succeeded");
                self.notifier.success(match mutation {
                    Mutation::Created => self.messages.product_created,
                    Mutation::Updated => self.messages.product_updated,
                    Mutation::Deleted => self.messages.product_deleted,
                });
                host.close();
                host.notify_changed();
            }
            Err(err) => {
                error!(error = %err, "product mutation failed");
                self.notifier.error(self.messages.generic_failure);
            }
        }
        result
    }
}

pub struct ProductModal {
    props: ModalProps,
    form: FormState,
    messages: &'static Messages,
}

impl ProductModal {
    pub fn open(props: ModalProps, locale: Locale) -> Self {
        let messages = locale.messages();
        let form = FormState::new(&props.product, messages);
        Self {
            props,
            form,
            messages,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn change(&mut self, field: ProductField, value: impl Into<String>) {
        self.form.change(field, value);
    }

    pub fn blur(&mut self, field: ProductField) {
        self.form.blur(field);
    }

    pub fn view(&self) -> ModalView {
        if !self.props.show {
            return ModalView::Hidden;
        }

        if self.props.mode.is_delete() {
            return ModalView::DeleteConfirmation {
                title: self.props.title.clone(),
                prompt: self.messages.delete_prompt,
                product_title: self.props.product.title.clone(),
                cancel_label: self.messages.cancel,
                confirm_label: self.messages.confirm_delete,
            };
        }

        let fields = ProductField::EDITABLE
            .into_iter()
            .map(|field| FieldView {
                field,
                label: field.label(self.messages),
                value: self.form.values().get(field),
                error: self.form.visible_error(field),
            })
            .collect();
        ModalView::Form {
            title: self.props.title.clone(),
            fields,
            cancel_label: self.messages.cancel,
            submit_label: self.messages.save,
            submit_enabled: self.form.is_valid(),
        }
    }

    /// Closes without touching the backend.
    pub fn cancel(&self) {
        self.props.host.close();
    }

    /// Product to persist when the form is shown and valid. Touches every
    /// field so that remaining errors become visible.
    pub fn submit_request(&mut self) -> Option<Product> {
        if !self.props.show || self.props.mode.is_delete() {
            return None;
        }
        self.form.submit_guard().ok()
    }

    pub fn delete_request(&self) -> Option<ProductId> {
        if !self.props.show || !self.props.mode.is_delete() {
            return None;
        }
        Some(self.props.product.id)
    }

    /// `None` when nothing was sent: wrong mode, hidden, or invalid form.
    pub async fn submit(
        &mut self,
        invoker: &PersistenceInvoker,
    ) -> Option<Result<Mutation, ServiceError>> {
        let product = self.submit_request()?;
        Some(invoker.save(&product, self.props.host.as_ref()).await)
    }

    pub async fn confirm_delete(
        &self,
        invoker: &PersistenceInvoker,
    ) -> Option<Result<Mutation, ServiceError>> {
        let id = self.delete_request()?;
        Some(invoker.delete(id, self.props.host.as_ref()).await)
    }
}

#[cfg(test)]
#[path = "tests/modal_tests.rs"]
mod tests;
