//! The marketplace store facade.
//!
//! All operations share the same shape: read the full record from the
//! backend, work on it in memory, write the full record back. The store
//! keeps no state of its own, so any number of handles over the same
//! backend see the same data.

use std::sync::Arc;

use krishibazaar_core::{
    Cart, Credentials, NewProduct, NewUser, Order, OrderDraft, OrderId, Product, ProductFilter,
    ProductId, ProductPatch, User, UserId, UserProfile,
};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::backend::{RecordKey, StorageBackend};
use crate::clock::Clock;
use crate::collection::{Collection, Keyed};
use crate::error::StoreError;
use crate::ids::{IdGenerator, IdKind};
use crate::seed;

/// Persistence and query facade over the record store.
///
/// The backend, id generator, and clock are injected so tests can swap in
/// a memory backend, counter ids, and a fixed instant.
#[derive(Clone)]
pub struct Store {
    backend: Arc<dyn StorageBackend>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
}

impl Store {
    /// Create a store over the given backend.
    #[must_use]
    pub fn new(
        backend: Arc<dyn StorageBackend>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            backend,
            ids,
            clock,
        }
    }

    /// Seed any collection that has never been written.
    ///
    /// Each collection is checked independently, so a store missing only
    /// `orders` gets only `orders`. Present records are left byte-for-byte
    /// untouched, which makes this safe to call on every boot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the medium cannot be read or written.
    pub async fn ensure_initialized(&self) -> Result<(), StoreError> {
        if self.backend.read(RecordKey::Products).await?.is_none() {
            let products = seed::products();
            self.save(RecordKey::Products, &products).await?;
            tracing::info!(count = products.len(), "seeded products");
        }
        if self.backend.read(RecordKey::Users).await?.is_none() {
            let users = seed::users();
            self.save(RecordKey::Users, &users).await?;
            tracing::info!(count = users.len(), "seeded users");
        }
        if self.backend.read(RecordKey::Orders).await?.is_none() {
            self.save(RecordKey::Orders, &Vec::<Order>::new()).await?;
            tracing::info!("seeded empty orders");
        }
        Ok(())
    }

    /// Create an account and return its password-free profile.
    ///
    /// The email must not already be registered; the check is exact and
    /// case-sensitive, like the rest of the identity handling.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateEmail`] if any account has the same
    /// email. Nothing is written on failure.
    pub async fn signup(&self, new_user: NewUser) -> Result<UserProfile, StoreError> {
        let mut users: Collection<User> = self.load_collection(RecordKey::Users).await?;

        if users.iter().any(|user| user.email == new_user.email) {
            return Err(StoreError::DuplicateEmail);
        }

        let user = User {
            id: UserId::new(self.ids.next(IdKind::User)),
            name: new_user.name,
            role: new_user.role,
            email: new_user.email,
            password: new_user.password,
        };
        let profile = user.profile();

        users.push(user);
        self.save(RecordKey::Users, &users).await?;

        tracing::debug!(user = %profile.id, "account created");
        Ok(profile)
    }

    /// Verify credentials and return the matching profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidCredentials`] unless exactly this email
    /// and password pair is on record.
    pub async fn login(&self, credentials: &Credentials) -> Result<UserProfile, StoreError> {
        let users: Collection<User> = self.load_collection(RecordKey::Users).await?;

        users
            .iter()
            .find(|user| {
                user.email == credentials.email && user.password == credentials.password
            })
            .map(User::profile)
            .ok_or(StoreError::InvalidCredentials)
    }

    /// List products matching the filter, promoted first.
    ///
    /// The sort is stable and keyed solely on the promoted flag, so stored
    /// order survives within the promoted and unpromoted groups.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] or [`StoreError::Corrupt`] if the
    /// products record cannot be read.
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Vec<Product>, StoreError> {
        let products: Collection<Product> = self.load_collection(RecordKey::Products).await?;
        let search = filter.search.as_deref().map(str::to_lowercase);

        let mut matches: Vec<Product> = products
            .iter()
            .filter(|product| filter.kind.is_none_or(|kind| product.kind == kind))
            .filter(|product| {
                search
                    .as_deref()
                    .is_none_or(|needle| product.name.to_lowercase().contains(needle))
            })
            .filter(|product| {
                filter
                    .merchant
                    .as_ref()
                    .is_none_or(|merchant| product.merchant_id == *merchant)
            })
            .cloned()
            .collect();

        matches.sort_by_key(|product| !product.promoted);
        Ok(matches)
    }

    /// Add a product to the catalog and return the stored record.
    ///
    /// The merchant id is recorded as supplied; it is not checked against
    /// the user collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the medium cannot be written.
    pub async fn add_product(&self, new_product: NewProduct) -> Result<Product, StoreError> {
        let mut products: Collection<Product> = self.load_collection(RecordKey::Products).await?;

        let product = Product {
            id: ProductId::new(self.ids.next(IdKind::Product)),
            name: new_product.name,
            kind: new_product.kind,
            price: new_product.price,
            qty: new_product.qty,
            merchant_id: new_product.merchant_id,
            promoted: new_product.promoted,
        };

        products.push(product.clone());
        self.save(RecordKey::Products, &products).await?;

        tracing::debug!(product = %product.id, "product added");
        Ok(product)
    }

    /// Apply a partial update to a product and return the merged record.
    ///
    /// Fields present in the patch overwrite; omitted fields are preserved.
    /// The id, type, and merchant of a product are not patchable.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] if no product has this id. Nothing
    /// is written on failure.
    pub async fn update_product(
        &self,
        id: &ProductId,
        patch: &ProductPatch,
    ) -> Result<Product, StoreError> {
        let mut products: Collection<Product> = self.load_collection(RecordKey::Products).await?;

        let Some(product) = products.get_mut(id.as_str()) else {
            return Err(StoreError::NotFound(id.clone()));
        };

        if let Some(name) = &patch.name {
            product.name.clone_from(name);
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(qty) = patch.qty {
            product.qty = qty;
        }
        if let Some(promoted) = patch.promoted {
            product.promoted = promoted;
        }
        let updated = product.clone();

        self.save(RecordKey::Products, &products).await?;
        Ok(updated)
    }

    /// Append an order and return it.
    ///
    /// The item snapshots are stored exactly as supplied: no price lookup,
    /// no stock decrement, no referential check. Orders never change after
    /// this call.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the medium cannot be written.
    pub async fn place_order(&self, draft: OrderDraft) -> Result<Order, StoreError> {
        let mut orders: Collection<Order> = self.load_collection(RecordKey::Orders).await?;

        let order = Order {
            id: OrderId::new(self.ids.next(IdKind::Order)),
            date: self.clock.now(),
            buyer_id: draft.buyer_id,
            items: draft.items,
        };

        orders.push(order.clone());
        self.save(RecordKey::Orders, &orders).await?;

        tracing::debug!(order = %order.id, items = order.items.len(), "order placed");
        Ok(order)
    }

    /// Every order containing at least one of the merchant's items.
    ///
    /// Whole orders are returned; callers narrow the line items for
    /// display if they need to.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] or [`StoreError::Corrupt`] if the
    /// orders record cannot be read.
    pub async fn orders_for_merchant(
        &self,
        merchant_id: &UserId,
    ) -> Result<Vec<Order>, StoreError> {
        let orders: Collection<Order> = self.load_collection(RecordKey::Orders).await?;

        Ok(orders
            .iter()
            .filter(|order| {
                order
                    .items
                    .iter()
                    .any(|item| item.merchant_id == *merchant_id)
            })
            .cloned()
            .collect())
    }

    /// The signed-in profile, if one was stored.
    ///
    /// A record holding JSON `null` reads the same as a missing record.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the record holds something other
    /// than a profile or `null`.
    pub async fn current_user(&self) -> Result<Option<UserProfile>, StoreError> {
        Ok(self
            .load::<Option<UserProfile>>(RecordKey::CurrentUser)
            .await?
            .flatten())
    }

    /// Store the signed-in profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the medium cannot be written.
    pub async fn set_current_user(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.save(RecordKey::CurrentUser, profile).await
    }

    /// Forget the signed-in profile.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the medium cannot be written.
    pub async fn clear_current_user(&self) -> Result<(), StoreError> {
        Ok(self.backend.remove(RecordKey::CurrentUser).await?)
    }

    /// The persisted cart, empty if none was stored.
    ///
    /// The cart belongs to the client; the store only round-trips it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Corrupt`] if the record is not a cart.
    pub async fn cart(&self) -> Result<Cart, StoreError> {
        Ok(self.load(RecordKey::Cart).await?.unwrap_or_default())
    }

    /// Persist the cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the medium cannot be written.
    pub async fn set_cart(&self, cart: &Cart) -> Result<(), StoreError> {
        self.save(RecordKey::Cart, cart).await
    }

    /// Drop the persisted cart.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Storage`] if the medium cannot be written.
    pub async fn clear_cart(&self) -> Result<(), StoreError> {
        Ok(self.backend.remove(RecordKey::Cart).await?)
    }

    async fn load<T: DeserializeOwned>(&self, key: RecordKey) -> Result<Option<T>, StoreError> {
        let Some(text) = self.backend.read(key).await? else {
            return Ok(None);
        };
        serde_json::from_str(&text)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key, source })
    }

    async fn save<T: Serialize>(&self, key: RecordKey, value: &T) -> Result<(), StoreError> {
        let text =
            serde_json::to_string(value).map_err(|source| StoreError::Encode { key, source })?;
        self.backend.write(key, &text).await?;
        Ok(())
    }

    async fn load_collection<T: DeserializeOwned + Keyed>(
        &self,
        key: RecordKey,
    ) -> Result<Collection<T>, StoreError> {
        Ok(self.load(key).await?.unwrap_or_default())
    }
}
