//! Account roles.

use serde::{Deserialize, Serialize};

/// Marketplace account role.
///
/// Farmers browse and order; merchants list products and fulfil orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Buys products and places orders.
    Farmer,
    /// Lists products and receives orders.
    Merchant,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Farmer => write!(f, "farmer"),
            Self::Merchant => write!(f, "merchant"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farmer" => Ok(Self::Farmer),
            "merchant" => Ok(Self::Merchant),
            _ => Err(format!("invalid role: {s}")),
        }
    }
}
