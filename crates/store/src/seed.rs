//! Default dataset installed on first access.
//!
//! The values here are load-bearing: clients and tests rely on `p2` being
//! the only promoted product and on the two seeded accounts logging in
//! with `pass123`.

use krishibazaar_core::{Email, Product, ProductId, ProductType, Role, User, UserId};
use rust_decimal::Decimal;

/// Products present in a fresh store.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("p1"),
            name: "Urea 46%".to_owned(),
            kind: ProductType::Fertilizer,
            price: Decimal::from(450),
            qty: 100,
            merchant_id: UserId::new("m1"),
            promoted: false,
        },
        Product {
            id: ProductId::new("p2"),
            name: "Glyphosate 41%".to_owned(),
            kind: ProductType::Herbicide,
            price: Decimal::from(1200),
            qty: 50,
            merchant_id: UserId::new("m2"),
            promoted: true,
        },
        Product {
            id: ProductId::new("p3"),
            name: "Imidacloprid 17.8%".to_owned(),
            kind: ProductType::Pesticide,
            price: Decimal::from(800),
            qty: 80,
            merchant_id: UserId::new("m1"),
            promoted: false,
        },
    ]
}

/// Accounts present in a fresh store.
#[must_use]
pub fn users() -> Vec<User> {
    vec![
        User {
            id: UserId::new("u1"),
            name: "Farmer Ramu".to_owned(),
            role: Role::Farmer,
            email: Email::new("farmer@example.com"),
            password: "pass123".to_owned(),
        },
        User {
            id: UserId::new("m1"),
            name: "Merchant John".to_owned(),
            role: Role::Merchant,
            email: Email::new("merchant@example.com"),
            password: "pass123".to_owned(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let products = products();
        assert_eq!(products.len(), 3);

        let promoted: Vec<&str> = products
            .iter()
            .filter(|p| p.promoted)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(promoted, ["p2"]);

        let users = users();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.password == "pass123"));
    }
}
