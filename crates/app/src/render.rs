//! Plain-text rendering of each screen.

use std::fmt::Write as _;

use stockpad_products::{Product, ProductForm, ProductRepository};

use crate::navigation::Screen;

/// Body of the orders tab; it has no interactive elements.
pub const ORDERS_PLACEHOLDER: &str = "Ver pedidos";

fn header(out: &mut String, screen: Screen) {
    let _ = writeln!(out, "== {} ==", screen.title());
}

pub fn product_list(products: &[Product]) -> String {
    let mut out = String::new();
    header(&mut out, Screen::ProductList);
    if products.is_empty() {
        out.push_str("  (no products)\n");
    }
    for product in products {
        let _ = writeln!(
            out,
            "  [{id}] {title}  (remove {id})",
            id = product.id_typed(),
            title = product.title(),
        );
    }
    out.push_str("[add] Add Product");
    out
}

pub fn product_form<R: ProductRepository>(form: &ProductForm<R>) -> String {
    let mut out = String::new();
    header(&mut out, Screen::ProductForm(form.product_id()));
    let _ = writeln!(out, "Product name: {}", form.title());
    let _ = writeln!(out, "Quantity: {}", form.quantity());
    let _ = writeln!(out, "Price: {}", form.price());
    out.push_str("[save] Save");
    out
}

pub fn orders() -> String {
    let mut out = String::new();
    header(&mut out, Screen::Orders);
    out.push_str(ORDERS_PLACEHOLDER);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockpad_products::InMemoryProductStore;

    #[test]
    fn empty_list_says_so() {
        let text = product_list(&[]);
        assert!(text.starts_with("== Manage Products =="));
        assert!(text.contains("(no products)"));
    }

    #[test]
    fn list_rows_show_id_and_title() {
        let store = InMemoryProductStore::new();
        store.add();
        store.add();
        let text = product_list(&store.list());
        assert!(text.contains("[1] Novo Produto"));
        assert!(text.contains("[2] Novo Produto  (remove 2)"));
    }

    #[test]
    fn form_shows_labeled_fields() {
        let store = InMemoryProductStore::new();
        let p = store.add();
        let mut form = ProductForm::open(&store, p.id_typed()).unwrap();
        form.on_price_change("12a0");
        let text = product_form(&form);
        assert!(text.contains("Product name: Novo Produto"));
        assert!(text.contains("Quantity: \n"));
        assert!(text.contains("Price: 120"));
    }

    #[test]
    fn orders_is_static() {
        assert_eq!(orders(), "== Orders ==\nVer pedidos");
    }
}
