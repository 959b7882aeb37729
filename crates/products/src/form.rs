//! Edit form bound to a single product record.

use stockpad_core::{DomainError, DomainResult, ProductId};

use crate::product::{DigitString, Product, ProductFields};
use crate::repository::ProductRepository;

/// Message shown when a save is attempted without a product name.
pub const TITLE_REQUIRED: &str = "product name is required";

/// Editing surface for one product.
///
/// Fields are copied from a snapshot when the form opens and are not
/// re-synced if the store changes afterwards; the last save wins.
#[derive(Debug)]
pub struct ProductForm<R> {
    repository: R,
    snapshot: Product,
    title: String,
    quantity: DigitString,
    price: DigitString,
}

impl<R: ProductRepository> ProductForm<R> {
    /// Bind a form to an already-fetched snapshot.
    pub fn new(repository: R, snapshot: Product) -> Self {
        Self {
            repository,
            title: snapshot.title().to_string(),
            quantity: snapshot.quantity().clone(),
            price: snapshot.price().clone(),
            snapshot,
        }
    }

    /// Fetch the record with `id` and bind a form to it.
    pub fn open(repository: R, id: ProductId) -> DomainResult<Self> {
        let snapshot = repository.get(id).ok_or_else(DomainError::not_found)?;
        Ok(Self::new(repository, snapshot))
    }

    pub fn product_id(&self) -> ProductId {
        self.snapshot.id_typed()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn quantity(&self) -> &DigitString {
        &self.quantity
    }

    pub fn price(&self) -> &DigitString {
        &self.price
    }

    pub fn on_title_change(&mut self, text: &str) {
        self.title = text.to_string();
    }

    /// Store `text` with every non-digit character stripped.
    pub fn on_quantity_change(&mut self, text: &str) {
        self.quantity = DigitString::filter(text);
    }

    /// Store `text` with every non-digit character stripped.
    pub fn on_price_change(&mut self, text: &str) {
        self.price = DigitString::filter(text);
    }

    pub fn is_dirty(&self) -> bool {
        self.title != self.snapshot.title()
            || &self.quantity != self.snapshot.quantity()
            || &self.price != self.snapshot.price()
    }

    /// Write the current fields back through the repository.
    ///
    /// The title check is a raw emptiness check; whitespace-only titles are
    /// accepted.
    pub fn save(&self) -> DomainResult<Product> {
        if self.title.is_empty() {
            tracing::warn!(product_id = %self.product_id(), "save rejected: empty title");
            return Err(DomainError::validation(TITLE_REQUIRED));
        }

        let fields = ProductFields::new(self.title.clone(), self.quantity.clone(), self.price.clone());
        self.repository.update(self.product_id(), fields)
    }
}
