//! Session-scoped product store.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use stockpad_core::{DomainError, DomainResult, IdSequence, ProductId};
use stockpad_events::{EventBus, InMemoryEventBus, Subscription};

use crate::product::{Product, ProductEvent, ProductFields};

/// Capability to read and mutate the session's product list.
///
/// Components that edit products (the form, the shell) receive an
/// implementation instead of a callback.
pub trait ProductRepository: Send + Sync {
    /// Append a placeholder record and return it.
    fn add(&self) -> Product;

    /// Replace the fields of the record with `id`, keeping its position.
    fn update(&self, id: ProductId, fields: ProductFields) -> DomainResult<Product>;

    /// Remove the record with `id` and return it.
    fn remove(&self, id: ProductId) -> DomainResult<Product>;

    /// All records, in insertion order.
    fn list(&self) -> Vec<Product>;

    fn get(&self, id: ProductId) -> Option<Product>;
}

impl<R> ProductRepository for Arc<R>
where
    R: ProductRepository + ?Sized,
{
    fn add(&self) -> Product {
        (**self).add()
    }

    fn update(&self, id: ProductId, fields: ProductFields) -> DomainResult<Product> {
        (**self).update(id, fields)
    }

    fn remove(&self, id: ProductId) -> DomainResult<Product> {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }
}

impl<R> ProductRepository for &R
where
    R: ProductRepository + ?Sized,
{
    fn add(&self) -> Product {
        (**self).add()
    }

    fn update(&self, id: ProductId, fields: ProductFields) -> DomainResult<Product> {
        (**self).update(id, fields)
    }

    fn remove(&self, id: ProductId) -> DomainResult<Product> {
        (**self).remove(id)
    }

    fn list(&self) -> Vec<Product> {
        (**self).list()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        (**self).get(id)
    }
}

#[derive(Debug, Default)]
struct StoreState {
    products: Vec<Product>,
    ids: IdSequence,
}

impl StoreState {
    fn position(&self, id: ProductId) -> Option<usize> {
        self.products.iter().position(|p| p.id_typed() == id)
    }
}

/// In-memory product store for one app session.
///
/// Every successful mutation publishes a [`ProductEvent`] to subscribers.
/// The state holds plain values only, so a poisoned lock is recovered rather
/// than surfaced.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    state: RwLock<StoreState>,
    changes: InMemoryEventBus<ProductEvent>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receive a [`ProductEvent`] after each successful mutation.
    pub fn subscribe(&self) -> Subscription<ProductEvent> {
        self.changes.subscribe()
    }

    pub fn len(&self) -> usize {
        self.read().products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, event: ProductEvent) {
        if let Err(e) = self.changes.publish(event) {
            tracing::warn!(error = ?e, "failed to publish product change");
        }
    }
}

impl ProductRepository for InMemoryProductStore {
    fn add(&self) -> Product {
        let product = {
            let mut state = self.write();
            let id = state.ids.next_id();
            let product = Product::placeholder(id);
            state.products.push(product.clone());
            product
        };

        tracing::debug!(product_id = %product.id_typed(), "product added");
        self.publish(ProductEvent::Added {
            product: product.clone(),
            occurred_at: Utc::now(),
        });
        product
    }

    fn update(&self, id: ProductId, fields: ProductFields) -> DomainResult<Product> {
        let product = {
            let mut state = self.write();
            let Some(idx) = state.position(id) else {
                tracing::warn!(product_id = %id, "update targeted unknown product");
                return Err(DomainError::not_found());
            };
            let product = Product::with_fields(id, fields);
            state.products[idx] = product.clone();
            product
        };

        tracing::debug!(product_id = %id, title = product.title(), "product updated");
        self.publish(ProductEvent::Updated {
            product: product.clone(),
            occurred_at: Utc::now(),
        });
        Ok(product)
    }

    fn remove(&self, id: ProductId) -> DomainResult<Product> {
        let removed = {
            let mut state = self.write();
            let Some(idx) = state.position(id) else {
                tracing::warn!(product_id = %id, "remove targeted unknown product");
                return Err(DomainError::not_found());
            };
            state.products.remove(idx)
        };

        tracing::debug!(product_id = %id, "product removed");
        self.publish(ProductEvent::Removed {
            product: removed.clone(),
            occurred_at: Utc::now(),
        });
        Ok(removed)
    }

    fn list(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    fn get(&self, id: ProductId) -> Option<Product> {
        let state = self.read();
        state.position(id).map(|idx| state.products[idx].clone())
    }
}
