//! Persistence collaborator for products: the [`ProductService`] seam and
//! its REST implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared::{
    domain::{Product, ProductId},
    error::ApiError,
};
use tracing::debug;

use crate::{config::ClientSettings, error::ServiceError};

#[async_trait]
pub trait ProductService: Send + Sync {
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError>;
    async fn create_product(&self, product: &Product) -> Result<Product, ServiceError>;
    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ServiceError>;
    async fn delete_product(&self, id: ProductId) -> Result<(), ServiceError>;
}

pub struct HttpProductService {
    http: Client,
    base_url: String,
}

impl HttpProductService {
    /// `base_url` is used verbatim; trailing slashes are the caller's concern
    /// (see [`crate::config::normalize_base_url`]).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Result<Self, ServiceError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()
            .map_err(|source| ServiceError::Http {
                url: settings.api_base_url.clone(),
                source,
            })?;
        Ok(Self {
            http,
            base_url: settings.api_base_url.clone(),
        })
    }

    fn products_url(&self) -> String {
        format!("{}/products", self.base_url)
    }

    fn product_url(&self, id: ProductId) -> String {
        format!("{}/products/{}", self.base_url, id.0)
    }

    async fn send(url: &str, request: RequestBuilder) -> Result<Response, ServiceError> {
        let response = request.send().await.map_err(|source| ServiceError::Http {
            url: url.to_string(),
            source,
        })?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let (code, message) = match ApiError::from_body(&body) {
            Some(api_error) => (Some(api_error.code), api_error.message),
            None => (None, body),
        };
        Err(ServiceError::Status {
            url: url.to_string(),
            status: status.as_u16(),
            code,
            message,
        })
    }

    async fn send_json<T: DeserializeOwned>(
        url: &str,
        request: RequestBuilder,
    ) -> Result<T, ServiceError> {
        Self::send(url, request)
            .await?
            .json()
            .await
            .map_err(|source| ServiceError::Decode {
                url: url.to_string(),
                source,
            })
    }
}

#[async_trait]
impl ProductService for HttpProductService {
    async fn list_products(&self) -> Result<Vec<Product>, ServiceError> {
        let url = self.products_url();
        Self::send_json(&url, self.http.get(&url)).await
    }

    async fn create_product(&self, product: &Product) -> Result<Product, ServiceError> {
        let url = self.products_url();
        debug!(title = %product.title, "creating product");
        Self::send_json(&url, self.http.post(&url).json(product)).await
    }

    async fn update_product(
        &self,
        id: ProductId,
        product: &Product,
    ) -> Result<Product, ServiceError> {
        let url = self.product_url(id);
        debug!(product_id = id.0, "updating product");
        Self::send_json(&url, self.http.put(&url).json(product)).await
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), ServiceError> {
        let url = self.product_url(id);
        debug!(product_id = id.0, "deleting product");
        Self::send(&url, self.http.delete(&url)).await?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/service_tests.rs"]
mod tests;
