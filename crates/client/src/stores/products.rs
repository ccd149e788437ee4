//! Product cache, lazy review loading, and publishing.
//!
//! The cache is a flat map keyed by product id, unbounded for the lifetime
//! of the application session. Once cached, a product's identity fields
//! never change in place; the only in-place mutations are the lazy
//! attachment of `reviews` and prepending newly authored reviews.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use reqwest::multipart::{Form, Part};
use tracing::{error, instrument};

use partsmarket_core::{NewProduct, NewReview, Product, ProductId, Review};

use crate::api::{self, ApiClient};
use crate::error::{Error, Result};
use crate::storage::{KeyValueStorage, TOKEN_KEY};

const SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
const ACCESS_DENIED: &str = "Acesso negado. Faça login novamente.";
const PUBLISH_PRODUCT_FAILED: &str = "Erro ao publicar produto.";
const PUBLISH_REVIEW_FAILED: &str = "Erro ao publicar avaliação.";

/// Owns the in-memory product cache and the global search term.
pub struct ProductStore {
    api: ApiClient,
    storage: Arc<dyn KeyValueStorage>,
    products: RwLock<HashMap<ProductId, Product>>,
    loading: AtomicBool,
    error: RwLock<Option<String>>,
    search_term: RwLock<String>,
}

impl ProductStore {
    #[must_use]
    pub fn new(api: ApiClient, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            api,
            storage,
            products: RwLock::new(HashMap::new()),
            loading: AtomicBool::new(false),
            error: RwLock::new(None),
            search_term: RwLock::new(String::new()),
        }
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Store-level error message for UI display, if the last action set one.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn set_error(&self, message: Option<String>) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = message;
    }

    /// A copy of the cached entry, if present.
    #[must_use]
    pub fn cached_product(&self, product_id: ProductId) -> Option<Product> {
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&product_id)
            .cloned()
    }

    /// Set the global search term (navbar -> listing view).
    pub fn set_search_term(&self, term: &str) {
        *self
            .search_term
            .write()
            .unwrap_or_else(PoisonError::into_inner) = term.to_string();
    }

    #[must_use]
    pub fn search_term(&self) -> String {
        self.search_term
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch a product, cache-first.
    ///
    /// - cached with reviews: returned as-is, zero network calls;
    /// - cached without reviews: only the reviews are fetched and attached;
    /// - uncached: one product GET, then one review GET, then cached.
    ///
    /// On product-fetch failure the store error is set and `None` returned;
    /// the product stays absent from the cache so the next call retries.
    /// A review-fetch failure is non-critical and does not fail the product.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn fetch_product_by_id(&self, product_id: ProductId) -> Option<Product> {
        if let Some(product) = self.cached_product(product_id) {
            if product.reviews.is_some() {
                return Some(product);
            }
            self.fetch_reviews_for_product(product_id).await;
            return self.cached_product(product_id);
        }

        let result: Result<Product> = async {
            let response = self.api.get(&format!("/Product/{product_id}")).send().await?;
            let response = api::into_api_result(response).await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(product) => {
                self.products
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(product_id, product);
                self.fetch_reviews_for_product(product_id).await;
                self.cached_product(product_id)
            }
            Err(err) => {
                self.set_error(Some(format!("Falha ao buscar produto: {err}")));
                None
            }
        }
    }

    /// Fetch a product's reviews, cache-first on the `reviews` field, and
    /// attach them to the cached entry.
    ///
    /// Failures are logged only - reviews are a non-critical augmentation -
    /// and leave `reviews` unset so a later call retries.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn fetch_reviews_for_product(&self, product_id: ProductId) -> Option<Vec<Review>> {
        if let Some(reviews) = self
            .cached_product(product_id)
            .and_then(|product| product.reviews)
        {
            return Some(reviews);
        }

        let result: Result<Vec<Review>> = async {
            let response = self
                .api
                .get(&format!("/review/product/{product_id}"))
                .send()
                .await?;
            let response = api::into_api_result(response).await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(reviews) => {
                if let Some(product) = self
                    .products
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_mut(&product_id)
                {
                    product.reviews = Some(reviews.clone());
                }
                Some(reviews)
            }
            Err(err) => {
                error!("Falha ao buscar avaliações: {err}");
                None
            }
        }
    }

    /// Publish a new product as a multipart submission.
    ///
    /// Requires a token in durable storage; fails with
    /// `Error::NotAuthenticated` before any network call otherwise. On
    /// success the returned product is cached under its new id.
    ///
    /// # Errors
    ///
    /// The original failure is re-thrown after the store error is set by
    /// priority: 401/403, then the server's first field validation message,
    /// then a generic publish-failure message.
    #[instrument(skip(self, payload))]
    pub async fn add_product(&self, payload: NewProduct) -> Result<Product> {
        self.loading.store(true, Ordering::SeqCst);
        self.set_error(None);
        let result = self.add_product_inner(payload).await;
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn add_product_inner(&self, payload: NewProduct) -> Result<Product> {
        if self.storage.get(TOKEN_KEY).is_none() {
            return Err(Error::NotAuthenticated);
        }

        let mut form = Form::new()
            .text("Name", payload.name)
            .text("Description", payload.description)
            .text("Price", payload.price.to_string())
            .text("StockQuantity", payload.stock_quantity.to_string())
            .text("CompatibleModel", payload.compatible_model)
            .text("Category", payload.category);

        if let Some(image) = payload.image {
            let part = Part::bytes(image.bytes)
                .file_name(image.file_name)
                .mime_str(&image.content_type)?;
            form = form.part("ImageFile", part);
        }

        let result: Result<Product> = async {
            let response = self.api.post("/Product").multipart(form).send().await?;
            let response = api::into_api_result(response).await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(product) => {
                self.products
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .insert(product.id, product.clone());
                Ok(product)
            }
            Err(err) => {
                let message = if err.is_auth_rejection() {
                    SESSION_EXPIRED.to_string()
                } else if let Some(field_message) = err.first_field_error() {
                    field_message.to_string()
                } else {
                    PUBLISH_PRODUCT_FAILED.to_string()
                };
                self.set_error(Some(message));
                Err(err)
            }
        }
    }

    /// Publish a review and prepend it to the cached product's review list
    /// (newest-first), creating the list if absent.
    ///
    /// # Errors
    ///
    /// `Error::NotAuthenticated` without a stored token; otherwise the
    /// original failure is re-thrown after the store error is set by
    /// priority: 401/403, then the server's message verbatim, then a generic
    /// publish-failure message.
    #[instrument(skip(self, payload))]
    pub async fn add_review(&self, payload: NewReview) -> Result<Review> {
        self.loading.store(true, Ordering::SeqCst);
        self.set_error(None);
        let result = self.add_review_inner(payload).await;
        self.loading.store(false, Ordering::SeqCst);
        result
    }

    async fn add_review_inner(&self, payload: NewReview) -> Result<Review> {
        if self.storage.get(TOKEN_KEY).is_none() {
            return Err(Error::NotAuthenticated);
        }

        let result: Result<Review> = async {
            let response = self.api.post("/review").json(&payload).send().await?;
            let response = api::into_api_result(response).await?;
            Ok(response.json().await?)
        }
        .await;

        match result {
            Ok(review) => {
                if let Some(product) = self
                    .products
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .get_mut(&review.product_id)
                {
                    product
                        .reviews
                        .get_or_insert_with(Vec::new)
                        .insert(0, review.clone());
                }
                Ok(review)
            }
            Err(err) => {
                let message = if err.is_auth_rejection() {
                    ACCESS_DENIED.to_string()
                } else if let Some(server_message) = err.server_message() {
                    server_message.to_string()
                } else {
                    PUBLISH_REVIEW_FAILED.to_string()
                };
                self.set_error(Some(message));
                Err(err)
            }
        }
    }
}
