//! Ordered collections with keyed access.

use std::collections::HashMap;

use krishibazaar_core::{Order, Product, User};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Records that carry their own id.
pub trait Keyed {
    /// The record's id as stored.
    fn key(&self) -> &str;
}

impl Keyed for Product {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Keyed for Order {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

/// An ordered collection with an id index over the stored array.
///
/// The persisted form is a plain JSON array, so the documented record
/// layout and its ordering are untouched; the index exists only in memory
/// and is rebuilt on load to give point lookups without a scan.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<T: Keyed> Collection<T> {
    /// An empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from stored items, indexing them by key.
    #[must_use]
    pub fn from_items(items: Vec<T>) -> Self {
        let index = items
            .iter()
            .enumerate()
            .map(|(position, item)| (item.key().to_owned(), position))
            .collect();
        Self { items, index }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up a record by its key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        self.index.get(key).and_then(|&position| self.items.get(position))
    }

    /// Look up a record for mutation.
    ///
    /// The caller must leave the record's id unchanged; the index maps the
    /// old key otherwise.
    #[must_use]
    pub fn get_mut(&mut self, key: &str) -> Option<&mut T> {
        self.index
            .get(key)
            .copied()
            .and_then(|position| self.items.get_mut(position))
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Append a record at the end of the collection.
    pub fn push(&mut self, item: T) {
        self.index.insert(item.key().to_owned(), self.items.len());
        self.items.push(item);
    }

    /// Iterate records in stored order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<'a, T: Keyed> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Serialize> Serialize for Collection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: DeserializeOwned + Keyed> Deserialize<'de> for Collection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::from_items(items))
    }
}
