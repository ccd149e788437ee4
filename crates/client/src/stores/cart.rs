//! Cart line items with derived totals.
//!
//! `items` is always a server-truth snapshot after a mutating call resolves.
//! The only speculative local mutation is the removal filter in
//! [`CartStore::remove_item`], applied after the server confirmed it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{PoisonError, RwLock};

use rust_decimal::Decimal;
use tracing::{error, instrument};

use partsmarket_core::{CartItem, CartItemId, ProductId};

use crate::error::Result;
use crate::services::CartService;

/// Owns the cart line items and the open/closed UI flag.
pub struct CartStore {
    service: CartService,
    items: RwLock<Vec<CartItem>>,
    loading: AtomicBool,
    is_open: AtomicBool,
}

impl CartStore {
    #[must_use]
    pub fn new(service: CartService) -> Self {
        Self {
            service,
            items: RwLock::new(Vec::new()),
            loading: AtomicBool::new(false),
            is_open: AtomicBool::new(false),
        }
    }

    /// Flip the open/closed UI flag. Pure, no network effect.
    pub fn toggle_cart(&self) {
        self.is_open.fetch_xor(true, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open.load(Ordering::SeqCst)
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// A copy of the current line items.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Total quantity across all line items. Computed live on every call,
    /// never cached relative to `items`.
    #[must_use]
    pub fn items_count(&self) -> u32 {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|item| item.quantity)
            .sum()
    }

    /// Total price across all line items. Computed live on every call.
    #[must_use]
    pub fn total_price(&self) -> Decimal {
        self.items
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|item| item.product.price * Decimal::from(item.quantity))
            .sum()
    }

    /// Replace `items` wholesale with the server's authoritative cart
    /// (empty when the server omits `items`). On failure the previous items
    /// are left in place and the error is only logged. Loading is cleared on
    /// every path.
    #[instrument(skip(self))]
    pub async fn fetch_cart(&self) {
        self.loading.store(true, Ordering::SeqCst);
        match self.service.get_cart().await {
            Ok(snapshot) => {
                *self.items.write().unwrap_or_else(PoisonError::into_inner) =
                    snapshot.items.unwrap_or_default();
            }
            Err(err) => error!("Erro ao buscar carrinho: {err}"),
        }
        self.loading.store(false, Ordering::SeqCst);
    }

    /// Add `quantity` of a product, open the cart, and refetch.
    ///
    /// The new item is never merged speculatively - truth is always
    /// re-derived from the server with a full [`CartStore::fetch_cart`].
    ///
    /// # Errors
    ///
    /// Re-throws the service failure to the caller; loading is still
    /// cleared and `items` untouched.
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_cart(&self, product_id: ProductId, quantity: u32) -> Result<()> {
        self.loading.store(true, Ordering::SeqCst);
        let result = self.service.add_item(product_id, quantity).await;
        match result {
            Ok(()) => {
                self.is_open.store(true, Ordering::SeqCst);
                self.fetch_cart().await;
                self.loading.store(false, Ordering::SeqCst);
                Ok(())
            }
            Err(err) => {
                error!("Erro ao adicionar ao carrinho: {err}");
                self.loading.store(false, Ordering::SeqCst);
                Err(err)
            }
        }
    }

    /// Remove one line item. On success the item is filtered out locally
    /// (optimistic local update, no refetch); on failure the error is logged
    /// and `items` left unchanged - nothing was mutated before the call, so
    /// there is nothing to roll back.
    #[instrument(skip(self), fields(item_id = %item_id))]
    pub async fn remove_item(&self, item_id: CartItemId) {
        match self.service.remove_item(item_id).await {
            Ok(()) => {
                self.items
                    .write()
                    .unwrap_or_else(PoisonError::into_inner)
                    .retain(|item| item.id != item_id);
            }
            Err(err) => error!("Erro ao remover item do carrinho: {err}"),
        }
    }

    /// Remove every line item, one call per item.
    ///
    /// Iterates a snapshot of the current items and removes sequentially -
    /// the backend cart is a single resource, so parallel removals would
    /// race against it. Individual failures are swallowed by
    /// [`CartStore::remove_item`] and do not abort the loop.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) {
        let snapshot = self.items();
        for item in snapshot {
            self.remove_item(item.id).await;
        }
    }
}
