//! Product catalog records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{ProductId, UserId};

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Fertilizer,
    Pesticide,
    Herbicide,
}

impl std::fmt::Display for ProductType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fertilizer => write!(f, "fertilizer"),
            Self::Pesticide => write!(f, "pesticide"),
            Self::Herbicide => write!(f, "herbicide"),
        }
    }
}

impl std::str::FromStr for ProductType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fertilizer" => Ok(Self::Fertilizer),
            "pesticide" => Ok(Self::Pesticide),
            "herbicide" => Ok(Self::Herbicide),
            _ => Err(format!("invalid product type: {s}")),
        }
    }
}

/// A catalog entry.
///
/// Prices are decimal and serialize as plain JSON numbers. `qty` is the
/// advertised stock level; placing an order does not decrement it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: u32,
    pub merchant_id: UserId,
    pub promoted: bool,
}

/// Caller-supplied fields for a new catalog entry.
///
/// The store assigns the id. The merchant id is recorded as given and not
/// checked against the user collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ProductType,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub qty: u32,
    pub merchant_id: UserId,
    #[serde(default)]
    pub promoted: bool,
}

/// Partial update for a product.
///
/// Only the mutable fields appear here: the id, type, and merchant of a
/// product are fixed at creation. Supplied fields overwrite, omitted
/// fields are preserved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub price: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qty: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promoted: Option<bool>,
}

/// Listing filters. Every field is optional; `None` means no constraint.
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    /// Exact category match.
    pub kind: Option<ProductType>,
    /// Case-insensitive substring match on the product name.
    pub search: Option<String>,
    /// Only products listed by this merchant.
    pub merchant: Option<UserId>,
}
