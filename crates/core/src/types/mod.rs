//! Core types for KrishiBazaar.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod order;
pub mod product;
pub mod role;
pub mod user;

pub use cart::{Cart, CartLine};
pub use email::Email;
pub use id::*;
pub use order::{Order, OrderDraft, OrderItem};
pub use product::{NewProduct, Product, ProductFilter, ProductPatch, ProductType};
pub use role::Role;
pub use user::{Credentials, NewUser, User, UserProfile};
