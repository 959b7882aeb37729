//! Products domain module.
//!
//! Session-scoped product records, the store that holds them, and the edit
//! form that writes back through it. No IO, no rendering.

pub mod form;
pub mod product;
pub mod repository;

pub use form::{ProductForm, TITLE_REQUIRED};
pub use product::{DigitString, PLACEHOLDER_TITLE, Product, ProductEvent, ProductFields};
pub use repository::{InMemoryProductStore, ProductRepository};
