//! View-side binding for the emails input control.
//!
//! Rendering is an external subscriber of the collection: nothing in the
//! controller knows about view nodes, and nothing here reaches back into
//! controller state. [`ChipArena`] maintains one render node per item,
//! keyed by the item's identity, and reconciles itself against each
//! snapshot the change signal delivers.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use parking_lot::Mutex;
//! use emails_input::{ChipArena, EmailCollection};
//!
//! let collection = EmailCollection::new();
//! let arena = Arc::new(Mutex::new(ChipArena::new()));
//!
//! let nodes = arena.clone();
//! collection.subscribe(move |items| {
//!     nodes.lock().sync(items);
//! });
//!
//! collection.add_items("ada@example.com, nope");
//!
//! let arena = arena.lock();
//! assert_eq!(arena.len(), 2);
//! let labels: Vec<&str> = arena.ordered().map(|chip| chip.text()).collect();
//! assert_eq!(labels, vec!["ada@example.com", "nope"]);
//! ```

use std::collections::{HashMap, HashSet};

use slotmap::{new_key_type, SlotMap};

use emails_input_core::ItemId;

use crate::item::EmailItem;

new_key_type! {
    /// Arena key for one chip node.
    ///
    /// Keys are stable across [`ChipArena::sync`] calls for as long as the
    /// underlying item exists, so a renderer can cache per-chip resources
    /// against them.
    pub struct ChipKey;
}

/// One render node: the visual "chip" for an email item.
#[derive(Debug, Clone)]
pub struct EmailChip {
    id: ItemId,
    text: String,
    valid: bool,
}

impl EmailChip {
    /// Identity of the item this chip displays.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The display text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the item was valid at insertion. Renderers typically style
    /// invalid chips differently (e.g. a warning color).
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}

/// An arena of chip nodes, keyed by item identity.
///
/// [`sync`](Self::sync) diffs a collection snapshot against the current
/// nodes: chips for surviving items are kept (same [`ChipKey`]), chips for
/// new items are created, and chips whose item disappeared are dropped.
/// Iteration order always follows the snapshot, i.e. insertion order.
#[derive(Debug, Default)]
pub struct ChipArena {
    chips: SlotMap<ChipKey, EmailChip>,
    by_item: HashMap<ItemId, ChipKey>,
    /// Chip keys in collection order, rebuilt on every sync.
    order: Vec<ChipKey>,
}

impl ChipArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of chips currently held.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the arena holds no chips.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Reconcile the arena against a collection snapshot.
    pub fn sync(&mut self, snapshot: &[EmailItem]) {
        let live: HashSet<ItemId> = snapshot.iter().map(|item| item.id()).collect();

        // Drop chips whose item is gone.
        let chips = &mut self.chips;
        self.by_item.retain(|id, key| {
            if live.contains(id) {
                true
            } else {
                chips.remove(*key);
                false
            }
        });

        // Walk the snapshot in order, creating chips for new items.
        self.order.clear();
        for item in snapshot {
            let key = match self.by_item.get(&item.id()) {
                Some(&key) => key,
                None => {
                    let key = chips.insert(EmailChip {
                        id: item.id(),
                        text: item.value().to_string(),
                        valid: item.is_valid(),
                    });
                    self.by_item.insert(item.id(), key);
                    key
                }
            };
            self.order.push(key);
        }

        tracing::trace!(
            target: "emails_input::view",
            chips = self.order.len(),
            "arena synced"
        );
    }

    /// Look up the chip for an item identity.
    pub fn get(&self, id: ItemId) -> Option<&EmailChip> {
        self.by_item.get(&id).and_then(|key| self.chips.get(*key))
    }

    /// The arena key for an item identity, if a chip exists.
    pub fn key_of(&self, id: ItemId) -> Option<ChipKey> {
        self.by_item.get(&id).copied()
    }

    /// Look up a chip by arena key.
    pub fn chip(&self, key: ChipKey) -> Option<&EmailChip> {
        self.chips.get(key)
    }

    /// Iterate chips in collection order.
    pub fn ordered(&self) -> impl Iterator<Item = &EmailChip> + '_ {
        self.order.iter().filter_map(|key| self.chips.get(*key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::EmailCollection;

    fn snapshot_of(collection: &EmailCollection) -> Vec<EmailItem> {
        collection.values()
    }

    #[test]
    fn test_sync_creates_chips_in_order() {
        let collection = EmailCollection::new();
        collection.add_items("b@x.com, a@x.com");

        let mut arena = ChipArena::new();
        arena.sync(&snapshot_of(&collection));

        let texts: Vec<&str> = arena.ordered().map(|chip| chip.text()).collect();
        assert_eq!(texts, vec!["b@x.com", "a@x.com"]);
    }

    #[test]
    fn test_chip_keys_are_stable_across_syncs() {
        let collection = EmailCollection::new();
        collection.add_items("a@x.com");

        let mut arena = ChipArena::new();
        arena.sync(&snapshot_of(&collection));
        let id = collection.values()[0].id();
        let key_before = arena.key_of(id).unwrap();

        collection.add_items("b@x.com");
        arena.sync(&snapshot_of(&collection));

        assert_eq!(arena.key_of(id), Some(key_before));
        assert_eq!(arena.len(), 2);
    }

    #[test]
    fn test_removed_items_drop_their_chips() {
        let collection = EmailCollection::new();
        collection.add_items("a@x.com, b@x.com");
        let first = collection.values()[0].id();

        let mut arena = ChipArena::new();
        arena.sync(&snapshot_of(&collection));
        let stale_key = arena.key_of(first).unwrap();

        collection.remove_item(first);
        arena.sync(&snapshot_of(&collection));

        assert_eq!(arena.len(), 1);
        assert!(arena.get(first).is_none());
        assert!(arena.chip(stale_key).is_none());
    }

    #[test]
    fn test_sync_with_empty_snapshot_clears_arena() {
        let collection = EmailCollection::new();
        collection.add_items("a@x.com");

        let mut arena = ChipArena::new();
        arena.sync(&snapshot_of(&collection));
        collection.reset();
        arena.sync(&snapshot_of(&collection));

        assert!(arena.is_empty());
    }

    #[test]
    fn test_chip_carries_validity() {
        let collection = EmailCollection::new();
        collection.add_items(["ok@example.com", "broken"]);

        let mut arena = ChipArena::new();
        arena.sync(&snapshot_of(&collection));

        let flags: Vec<bool> = arena.ordered().map(|chip| chip.is_valid()).collect();
        assert_eq!(flags, vec![true, false]);
    }
}
