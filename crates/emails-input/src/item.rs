//! The item type stored by the collection controller.

use emails_input_core::ItemId;

/// One email entry in the collection.
///
/// An item is created when the controller accepts a unique, non-empty
/// candidate string. Its fields are fixed at creation: the trimmed value as
/// the user provided it (no lowercasing or other normalization), the
/// validity computed against the pattern configured at that moment, and the
/// identity the controller assigned. Reconfiguring a controller's pattern
/// later never re-evaluates existing items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailItem {
    id: ItemId,
    value: String,
    valid: bool,
}

impl EmailItem {
    pub(crate) fn new(id: ItemId, value: String, valid: bool) -> Self {
        debug_assert!(!value.trim().is_empty(), "items never hold blank values");
        Self { id, value, valid }
    }

    /// The identity the controller assigned at creation.
    ///
    /// Unique within the controller instance for its whole lifetime; never
    /// reused, even after the item is removed.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// The trimmed value as the user provided it.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether the value matched the validation pattern at insertion time.
    pub fn is_valid(&self) -> bool {
        self.valid
    }
}
