use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpad_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};
use stockpad_events::Event;

/// Title given to records created by the "add" action.
pub const PLACEHOLDER_TITLE: &str = "Novo Produto";

/// A string holding only ASCII digits (`0`-`9`), possibly empty.
///
/// Quantities and prices are kept as raw digit strings: no decimal point, no
/// currency, no leading-zero normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DigitString(String);

impl DigitString {
    pub fn empty() -> Self {
        Self(String::new())
    }

    /// Keep only the digit characters of `text`, in order.
    pub fn filter(text: &str) -> Self {
        Self(text.chars().filter(char::is_ascii_digit).collect())
    }

    /// Accept `text` only if it is already all digits.
    pub fn parse(text: &str) -> DomainResult<Self> {
        if text.chars().all(|c| c.is_ascii_digit()) {
            Ok(Self(text.to_string()))
        } else {
            Err(DomainError::validation(format!(
                "{text:?} contains non-digit characters"
            )))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl ValueObject for DigitString {}

impl core::fmt::Display for DigitString {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DigitString {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DigitString> for String {
    fn from(value: DigitString) -> Self {
        value.0
    }
}

/// The editable part of a product record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductFields {
    pub title: String,
    pub quantity: DigitString,
    pub price: DigitString,
}

impl ProductFields {
    pub fn new(title: impl Into<String>, quantity: DigitString, price: DigitString) -> Self {
        Self {
            title: title.into(),
            quantity,
            price,
        }
    }
}

/// A product record held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    quantity: DigitString,
    price: DigitString,
}

impl Product {
    /// A fresh record as produced by the "add" action.
    pub fn placeholder(id: ProductId) -> Self {
        Self {
            id,
            title: PLACEHOLDER_TITLE.to_string(),
            quantity: DigitString::empty(),
            price: DigitString::empty(),
        }
    }

    pub fn with_fields(id: ProductId, fields: ProductFields) -> Self {
        Self {
            id,
            title: fields.title,
            quantity: fields.quantity,
            price: fields.price,
        }
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
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
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Change published after every successful store mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductEvent {
    Added {
        product: Product,
        occurred_at: DateTime<Utc>,
    },
    Updated {
        product: Product,
        occurred_at: DateTime<Utc>,
    },
    Removed {
        product: Product,
        occurred_at: DateTime<Utc>,
    },
}

impl Event for ProductEvent {
    fn event_type(&self) -> &'static str {
        match self {
            ProductEvent::Added { .. } => "products.product.added",
            ProductEvent::Updated { .. } => "products.product.updated",
            ProductEvent::Removed { .. } => "products.product.removed",
        }
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            ProductEvent::Added { occurred_at, .. }
            | ProductEvent::Updated { occurred_at, .. }
            | ProductEvent::Removed { occurred_at, .. } => *occurred_at,
        }
    }
}
