//! The storefront facade and its id-keyed registries.

use std::collections::HashMap;

use vapor_model::{Developer, Game, HasId, Tag, User};

use crate::error::StoreError;
use crate::ids::IdGenerator;

// ── Registry ────────────────────────────────────────────────────────────────

/// Insertion-ordered entity store with O(1) id lookup.
///
/// Entries are never removed, so positions handed out by [`Registry::position`]
/// stay valid for the life of the registry.
#[derive(Debug)]
pub(crate) struct Registry<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: HasId> Registry<T> {
    pub(crate) fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build from a catalog list, rejecting repeated ids.
    pub(crate) fn from_items(kind: &'static str, items: Vec<T>) -> Result<Self, StoreError> {
        let mut registry = Self::new();
        for item in items {
            registry.insert(kind, item)?;
        }
        Ok(registry)
    }

    pub(crate) fn insert(&mut self, kind: &'static str, item: T) -> Result<(), StoreError> {
        if self.index.contains_key(item.id()) {
            return Err(StoreError::DuplicateId {
                kind,
                id: item.id().to_string(),
            });
        }
        self.index.insert(item.id().to_string(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    pub(crate) fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&ix| &self.items[ix])
    }

    pub(crate) fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.index.get(id).map(|&ix| &mut self.items[ix])
    }

    pub(crate) fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn at(&self, ix: usize) -> &T {
        &self.items[ix]
    }

    pub(crate) fn at_mut(&mut self, ix: usize) -> &mut T {
        &mut self.items[ix]
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub(crate) fn items(&self) -> &[T] {
        &self.items
    }

    pub(crate) fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

// ── Storefront ──────────────────────────────────────────────────────────────

/// The storefront: three fixed catalogs, a growing user base, and the rules
/// that tie them together.
///
/// All state lives in memory. Every method is synchronous, and the mutating
/// ones take `&mut self`, so exclusive access is a compile-time property for
/// in-process callers; a concurrent host must add its own lock around the
/// whole facade.
#[derive(Debug)]
pub struct Storefront {
    pub(crate) games: Registry<Game>,
    pub(crate) developers: Registry<Developer>,
    pub(crate) tags: Registry<Tag>,
    pub(crate) users: Registry<User>,
    pub(crate) ids: IdGenerator,
}

impl Storefront {
    /// Build a storefront around the given catalogs, with no users yet.
    ///
    /// Fails with [`StoreError::DuplicateId`] if a catalog repeats an id.
    pub fn new(
        games: Vec<Game>,
        developers: Vec<Developer>,
        tags: Vec<Tag>,
    ) -> Result<Self, StoreError> {
        Ok(Self {
            games: Registry::from_items("game", games)?,
            developers: Registry::from_items("developer", developers)?,
            tags: Registry::from_items("tag", tags)?,
            users: Registry::new(),
            ids: IdGenerator::new(),
        })
    }

    /// Every game, in catalog order.
    pub fn games(&self) -> &[Game] {
        self.games.items()
    }

    /// Every developer, in catalog order.
    pub fn developers(&self) -> &[Developer] {
        self.developers.items()
    }

    /// Every tag, in catalog order.
    pub fn tags(&self) -> &[Tag] {
        self.tags.items()
    }

    /// Every user, in registration order.
    pub fn users(&self) -> &[User] {
        self.users.items()
    }
}
