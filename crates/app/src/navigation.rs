//! Tabs and the products-tab navigation stack.

use thiserror::Error;

use stockpad_core::ProductId;

/// Top-level tabs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Products,
    Orders,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown tab {0:?} (expected \"products\" or \"orders\")")]
pub struct ParseTabError(pub String);

impl core::str::FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "products" | "home" => Ok(Tab::Products),
            "orders" => Ok(Tab::Orders),
            _ => Err(ParseTabError(s.trim().to_string())),
        }
    }
}

/// Entries of the products-tab stack.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Route {
    ProductList,
    ProductForm(ProductId),
}

/// What is currently on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Screen {
    ProductList,
    ProductForm(ProductId),
    Orders,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::ProductList => "Manage Products",
            Screen::ProductForm(_) => "Product Details",
            Screen::Orders => "Orders",
        }
    }
}

impl core::fmt::Display for Screen {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.title())
    }
}

/// Tab selection plus the products stack.
///
/// The stack always keeps `ProductList` at the bottom; switching tabs leaves
/// it untouched so returning to products shows the same screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    tab: Tab,
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            tab: Tab::Products,
            stack: vec![Route::ProductList],
        }
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        if self.tab != tab {
            tracing::info!(from = ?self.tab, to = ?tab, "switch tab");
            self.tab = tab;
        }
    }

    pub fn current(&self) -> Screen {
        match (self.tab, self.stack.last()) {
            (Tab::Orders, _) => Screen::Orders,
            (Tab::Products, Some(Route::ProductForm(id))) => Screen::ProductForm(*id),
            (Tab::Products, _) => Screen::ProductList,
        }
    }

    pub fn push(&mut self, route: Route) {
        tracing::info!(?route, "navigate");
        self.stack.push(route);
    }

    /// Pop the top route; the list at the bottom is never popped.
    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        let route = self.stack.pop();
        tracing::info!(?route, "navigate back");
        route
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_product_list() {
        let nav = Navigator::new();
        assert_eq!(nav.current(), Screen::ProductList);
    }

    #[test]
    fn push_and_pop_form() {
        let mut nav = Navigator::new();
        let id = ProductId::from_raw(1);
        nav.push(Route::ProductForm(id));
        assert_eq!(nav.current(), Screen::ProductForm(id));
        assert_eq!(nav.pop(), Some(Route::ProductForm(id)));
        assert_eq!(nav.current(), Screen::ProductList);
    }

    #[test]
    fn list_is_never_popped() {
        let mut nav = Navigator::new();
        assert_eq!(nav.pop(), None);
        assert_eq!(nav.current(), Screen::ProductList);
    }

    #[test]
    fn switching_tabs_preserves_stack() {
        let mut nav = Navigator::new();
        let id = ProductId::from_raw(2);
        nav.push(Route::ProductForm(id));
        nav.switch_tab(Tab::Orders);
        assert_eq!(nav.current(), Screen::Orders);
        nav.switch_tab(Tab::Products);
        assert_eq!(nav.current(), Screen::ProductForm(id));
    }

    #[test]
    fn tab_parses_names() {
        assert_eq!("Orders".parse::<Tab>(), Ok(Tab::Orders));
        assert_eq!("home".parse::<Tab>(), Ok(Tab::Products));
        assert_eq!(
            "settings".parse::<Tab>(),
            Err(ParseTabError("settings".to_string()))
        );
    }
}
