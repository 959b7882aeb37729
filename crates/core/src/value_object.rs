//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects carry no identity and are replaced rather than mutated. A
/// product's quantity is one: two quantities holding `"59"` are the same
/// quantity, while two products with the same title are still different
/// records.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
