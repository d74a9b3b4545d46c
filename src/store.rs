//! The in-memory item collection.
//!
//! [`ItemStore`] owns the authoritative list of items. Every operation takes
//! the single lock guarding the list, so mutations are serialised against each
//! other and against readers. Locks are never held across an `.await`.

use std::sync::Arc;

use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

// ── Wire types ────────────────────────────────────────────────────────────────

/// A checklist entry.
///
/// Serialised as `{"UUID": "...", "Name": "...", "Done": false}`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item {
    #[serde(rename = "UUID", alias = "uuid", alias = "Uuid")]
    pub uuid: String,
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Done", alias = "done")]
    pub done: bool,
}

/// The caller-supplied part of an item on create.
///
/// An identifier in the payload is not part of this type and is dropped
/// during decoding.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct NewItem {
    #[serde(rename = "Name", alias = "name")]
    pub name: String,
    #[serde(rename = "Done", alias = "done")]
    pub done: bool,
}

/// A replacement payload on update. Absent fields keep their stored value.
///
/// `uuid` is decoded so callers may round-trip a full item, but it is never
/// applied.
#[derive(Clone, Debug, Default, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct ItemUpdate {
    #[serde(rename = "UUID", alias = "uuid", alias = "Uuid")]
    pub uuid: Option<String>,
    #[serde(rename = "Name", alias = "name")]
    pub name: Option<String>,
    #[serde(rename = "Done", alias = "done")]
    pub done: Option<bool>,
}

impl ItemUpdate {
    fn apply_to(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(done) = self.done {
            item.done = done;
        }
    }
}

// ── Identifier generation ─────────────────────────────────────────────────────

/// Produces a globally unique, opaque identifier on each call.
pub trait IdGenerator: Send + Sync + 'static {
    fn generate(&self) -> String;
}

/// Random (v4) UUIDs in hyphenated lowercase form.
#[derive(Clone, Copy, Debug, Default)]
pub struct UuidV4;

impl IdGenerator for UuidV4 {
    fn generate(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Any `Fn() -> String` works as a generator, which keeps tests deterministic.
impl<F> IdGenerator for F
where
    F: Fn() -> String + Send + Sync + 'static,
{
    fn generate(&self) -> String {
        self()
    }
}

// ── Errors ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("missing item identifier")]
    InvalidRequest,

    #[error("item {0} not found")]
    NotFound(String),
}

// ── Store ─────────────────────────────────────────────────────────────────────

/// Owner of the item collection.
pub struct ItemStore {
    items: RwLock<Vec<Item>>,
    ids: Arc<dyn IdGenerator>,
}

impl ItemStore {
    /// An empty store issuing random UUIDs.
    pub fn new() -> Self {
        Self::with_generator(UuidV4)
    }

    pub fn with_generator(ids: impl IdGenerator) -> Self {
        Self { items: RwLock::new(Vec::new()), ids: Arc::new(ids) }
    }

    /// A store that starts out holding `items`, in order.
    ///
    /// Identifiers are taken as given; keeping them unique is up to the caller.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = RwLock::new(items);
        self
    }

    /// A store holding the single example item the index page ships with.
    pub fn seeded() -> Self {
        let store = Self::new();
        store.create(NewItem { name: "Eggs x 10".to_owned(), done: false });
        store
    }

    /// Assigns a fresh identifier to `candidate` and appends it.
    pub fn create(&self, candidate: NewItem) -> Item {
        let item = Item {
            uuid: self.ids.generate(),
            name: candidate.name,
            done: candidate.done,
        };
        self.items.write().push(item.clone());
        debug!(uuid = %item.uuid, "item created");
        item
    }

    /// The whole collection in insertion order.
    pub fn list(&self) -> Vec<Item> {
        self.items.read().clone()
    }

    /// Applies `replacement` to the first item with identifier `id` and
    /// returns the whole collection afterwards.
    ///
    /// The stored identifier is kept even if `replacement` carries another.
    pub fn update(&self, id: &str, replacement: ItemUpdate) -> Result<Vec<Item>, StoreError> {
        if id.is_empty() {
            return Err(StoreError::InvalidRequest);
        }
        let mut items = self.items.write();
        let item = items.iter_mut()
            .find(|item| item.uuid == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        replacement.apply_to(item);
        debug!(uuid = %id, done = item.done, "item updated");
        Ok(items.clone())
    }

    /// Removes the first item with identifier `id`.
    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        if id.is_empty() {
            return Err(StoreError::InvalidRequest);
        }
        let mut items = self.items.write();
        let index = items.iter()
            .position(|item| item.uuid == id)
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        items.remove(index);
        debug!(uuid = %id, "item deleted");
        Ok(())
    }

    pub fn len(&self) -> usize { self.items.read().len() }
    pub fn is_empty(&self) -> bool { self.items.read().is_empty() }
}

impl Default for ItemStore {
    fn default() -> Self { Self::new() }
}
