//! Stable item identity for the emails input control.
//!
//! Every item in a collection gets an [`ItemId`] at creation time. The ID is
//! the handle the hosting environment uses to request removal, and the key
//! the view layer uses to map items to render nodes. IDs are never reused
//! within a collection instance, even after the item is removed.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Process-wide source of item IDs.
///
/// Drawing every ID from one counter keeps identifiers from different
/// collection instances in the same process visually distinct. That is a
/// debugging convenience, not a correctness requirement; uniqueness within
/// one instance is the contract.
static NEXT_ITEM_ID: AtomicU64 = AtomicU64::new(1);

/// A stable, opaque identifier for one item in a collection.
///
/// `ItemId`s are assigned when the item is created and remain valid for the
/// item's whole lifetime. They are `Copy` and cheap to pass around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(u64);

impl ItemId {
    /// Convert the ItemId to a raw u64 value.
    ///
    /// The raw value can be converted back using [`ItemId::from_raw`].
    pub fn to_raw(self) -> u64 {
        self.0
    }

    /// Create an ItemId from a raw u64 value.
    ///
    /// This does not check whether any collection ever issued the value; it
    /// exists so hosts can round-trip IDs through untyped boundaries.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues [`ItemId`]s for one collection instance.
///
/// Each generator draws from the process-wide counter, so the IDs it hands
/// out are strictly increasing for the instance and never collide with IDs
/// issued by any other generator in the process.
#[derive(Debug, Default)]
pub struct IdentityGenerator {
    _private: (),
}

impl IdentityGenerator {
    /// Create a generator for a new collection instance.
    pub fn new() -> Self {
        Self { _private: () }
    }

    /// Issue the next identity.
    pub fn next_id(&self) -> ItemId {
        ItemId(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_monotonic_per_generator() {
        let ids = IdentityGenerator::new();
        let a = ids.next_id();
        let b = ids.next_id();
        let c = ids.next_id();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_ids_are_distinct_across_generators() {
        let first = IdentityGenerator::new();
        let second = IdentityGenerator::new();

        let mut seen = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(seen.insert(first.next_id()));
            assert!(seen.insert(second.next_id()));
        }
    }

    #[test]
    fn test_raw_round_trip() {
        let id = IdentityGenerator::new().next_id();
        assert_eq!(ItemId::from_raw(id.to_raw()), id);
    }
}
