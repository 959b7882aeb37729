use chrono::{DateTime, Utc};

/// A domain-agnostic event.
///
/// Events are immutable facts about something that already happened to the
/// session's state.
pub trait Event: Clone + core::fmt::Debug + Send + Sync + 'static {
    /// Stable event name/type identifier (e.g. "products.product.added").
    fn event_type(&self) -> &'static str;

    /// When the event occurred.
    fn occurred_at(&self) -> DateTime<Utc>;
}
