//! Client-side shopping cart.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, UserId};
use super::order::OrderItem;
use super::product::{Product, ProductType};

/// One line of the cart: the product as it looked when added, with `qty`
/// repurposed as the quantity in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub merchant_id: UserId,
    pub promoted: bool,
    pub qty: u32,
}

impl From<&Product> for CartLine {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            kind: product.kind,
            price: product.price,
            merchant_id: product.merchant_id.clone(),
            promoted: product.promoted,
            qty: 1,
        }
    }
}

/// An ordered sequence of cart lines, keyed by product id.
///
/// The cart belongs to the client: the store persists it as a scalar record
/// but no server-side operation inspects it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// The cart lines in insertion order.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add one unit of a product.
    ///
    /// If the product is already in the cart its quantity goes up by one;
    /// otherwise a new line is appended at the end.
    pub fn add(&mut self, product: &Product) {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == product.id) {
            line.qty += 1;
        } else {
            self.lines.push(CartLine::from(product));
        }
    }

    /// Total price of the cart, `price * qty` summed over all lines.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.lines
            .iter()
            .map(|line| line.price * Decimal::from(line.qty))
            .sum()
    }

    /// The checkout snapshot: one [`OrderItem`] per line.
    #[must_use]
    pub fn order_items(&self) -> Vec<OrderItem> {
        self.lines
            .iter()
            .map(|line| OrderItem {
                id: line.id.clone(),
                name: line.name.clone(),
                price: line.price,
                qty: line.qty,
                merchant_id: line.merchant_id.clone(),
            })
            .collect()
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn urea() -> Product {
        Product {
            id: ProductId::new("p1"),
            name: "Urea 46%".to_owned(),
            kind: ProductType::Fertilizer,
            price: Decimal::from(450),
            qty: 100,
            merchant_id: UserId::new("m1"),
            promoted: false,
        }
    }

    fn glyphosate() -> Product {
        Product {
            id: ProductId::new("p2"),
            name: "Glyphosate 41%".to_owned(),
            kind: ProductType::Herbicide,
            price: Decimal::from(1200),
            qty: 50,
            merchant_id: UserId::new("m2"),
            promoted: true,
        }
    }

    #[test]
    fn test_add_merges_by_product_id() {
        let mut cart = Cart::new();
        cart.add(&urea());
        cart.add(&glyphosate());
        cart.add(&urea());

        assert_eq!(cart.lines().len(), 2);
        assert_eq!(cart.lines()[0].id.as_str(), "p1");
        assert_eq!(cart.lines()[0].qty, 2);
        assert_eq!(cart.lines()[1].qty, 1);
    }

    #[test]
    fn test_cart_line_quantity_starts_at_one() {
        let line = CartLine::from(&urea());
        assert_eq!(line.qty, 1);
        assert_eq!(line.price, Decimal::from(450));
    }

    #[test]
    fn test_total_sums_price_times_qty() {
        let mut cart = Cart::new();
        cart.add(&urea());
        cart.add(&urea());
        cart.add(&glyphosate());

        assert_eq!(cart.total(), Decimal::from(2100));
    }

    #[test]
    fn test_order_items_snapshot() {
        let mut cart = Cart::new();
        cart.add(&urea());
        cart.add(&urea());

        let items = cart.order_items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id.as_str(), "p1");
        assert_eq!(items[0].qty, 2);
        assert_eq!(items[0].merchant_id.as_str(), "m1");
    }

    #[test]
    fn test_serde_is_a_plain_array() {
        let mut cart = Cart::new();
        cart.add(&urea());

        let json = serde_json::to_value(&cart).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["type"], "fertilizer");
        assert_eq!(json[0]["qty"], 1);
    }
}
