//! The collection controller.
//!
//! [`EmailCollection`] owns the ordered list of email items and is the only
//! code that mutates it. Raw input (a typed string, a pasted blob, or a
//! programmatic sequence) flows in through [`add_items`], is parsed,
//! trimmed, deduplicated, and validated, and every committed mutation fans
//! out one change notification carrying a snapshot of the full collection.
//!
//! All operations are synchronous and run to completion; subscribers are
//! invoked in subscription order within the mutating call itself. No
//! operation can observe a partially-applied mutation.
//!
//! [`add_items`]: EmailCollection::add_items
//!
//! # Example
//!
//! ```
//! use emails_input::EmailCollection;
//!
//! let collection = EmailCollection::new();
//!
//! collection.items_changed.connect(|items| {
//!     println!("collection now holds {} item(s)", items.len());
//! });
//!
//! collection.add_items("ada@example.com, ada@example.com, grace@example.com");
//! assert_eq!(collection.len(), 2);
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use parking_lot::RwLock;

use emails_input_core::{ConnectionId, IdentityGenerator, ItemId, Signal, ThreadAffinity};

use crate::item::EmailItem;
use crate::validator::{EmailValidator, Validator};

/// Raw input accepted by [`EmailCollection::add_items`].
///
/// A single text blob is split on the separator rule (a comma, together
/// with any whitespace run around it, delimits candidates). A sequence is
/// taken as pre-split candidates: elements are trimmed but never split
/// further.
#[derive(Debug, Clone)]
pub enum RawInput {
    /// One blob of text, e.g. from typing or a paste.
    Text(String),
    /// Pre-split candidate strings, e.g. from a programmatic call.
    Values(Vec<String>),
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<String>> for RawInput {
    fn from(values: Vec<String>) -> Self {
        Self::Values(values)
    }
}

impl From<&[&str]> for RawInput {
    fn from(values: &[&str]) -> Self {
        Self::Values(values.iter().map(|s| s.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for RawInput {
    fn from(values: [&str; N]) -> Self {
        Self::Values(values.iter().map(|s| s.to_string()).collect())
    }
}

impl RawInput {
    /// Flatten into trimmed, non-empty candidate strings, in input order.
    ///
    /// Consecutive, leading, or trailing delimiters produce empty segments;
    /// those vanish here along with whitespace-only candidates.
    fn into_candidates(self) -> Vec<String> {
        match self {
            Self::Text(text) => text
                .split(',')
                .map(str::trim)
                .filter(|candidate| !candidate.is_empty())
                .map(String::from)
                .collect(),
            Self::Values(values) => values
                .iter()
                .map(|value| value.trim())
                .filter(|candidate| !candidate.is_empty())
                .map(String::from)
                .collect(),
        }
    }
}

/// Payload of the ambient "collection changed" event.
///
/// Carries the same snapshot the direct subscribers observed for the
/// triggering mutation. See [`EmailCollection::change_events`].
#[derive(Debug, Clone)]
pub struct CollectionChanged {
    /// The full collection, in insertion order, as of the mutation.
    pub items: Vec<EmailItem>,
}

/// The collection controller: an ordered, deduplicated, validated list of
/// email items with change notification.
///
/// # Invariants
///
/// - Stored values are non-empty after trimming.
/// - No two items share the same value (exact string comparison, case
///   sensitive, no normalization).
/// - Insertion order is preserved; the collection is an ordered sequence
///   with set semantics on the value.
/// - Identities are assigned at item creation, increase monotonically, and
///   are never reused within an instance.
///
/// # Signals
///
/// - [`items_changed`](Self::items_changed): emitted once per committed
///   mutation with a snapshot of the full collection.
pub struct EmailCollection {
    /// The ordered item list. Interior mutability keeps the public surface
    /// `&self` so a collection can sit behind `Arc` next to its signal.
    items: RwLock<Vec<EmailItem>>,
    ids: IdentityGenerator,
    /// Fixed for the instance's lifetime; consulted once per inserted item.
    validator: Arc<dyn Validator>,
    /// Signal emitted when the collection changes.
    pub items_changed: Signal<Vec<EmailItem>>,
    affinity: ThreadAffinity,
}

impl Default for EmailCollection {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailCollection {
    /// Create an empty collection validating with the default email pattern.
    pub fn new() -> Self {
        Self::with_validator(EmailValidator::new())
    }

    /// Create an empty collection with the given validator.
    ///
    /// Pass [`EmailValidator::disabled`] to accept any non-empty value.
    pub fn with_validator<V: Validator + 'static>(validator: V) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            ids: IdentityGenerator::new(),
            validator: Arc::new(validator),
            items_changed: Signal::new(),
            affinity: ThreadAffinity::current(),
        }
    }

    /// Returns the number of items in the collection.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    /// Returns `true` if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }

    /// Returns an independent snapshot of the collection in insertion order.
    ///
    /// The returned items own their data; mutating or dropping the vector
    /// never affects controller state.
    pub fn values(&self) -> Vec<EmailItem> {
        self.items.read().clone()
    }

    /// Parse raw input into candidates and append the unique survivors.
    ///
    /// Candidates are trimmed, empties discarded, and duplicates dropped,
    /// both against values already in the collection and against earlier
    /// candidates in the same batch, keeping the first occurrence. Each
    /// survivor becomes an item with validity computed now, against the
    /// configured pattern, and an identity assigned now.
    ///
    /// Emits [`items_changed`](Self::items_changed) once if at least one
    /// item was appended. A batch with zero survivors is a silent no-op.
    pub fn add_items<I: Into<RawInput>>(&self, input: I) {
        self.affinity.debug_assert_same_thread();

        let candidates = input.into().into_candidates();
        if candidates.is_empty() {
            return;
        }

        let mut appended = 0usize;
        {
            let mut items = self.items.write();
            let mut seen: HashSet<String> =
                items.iter().map(|item| item.value().to_string()).collect();

            for candidate in candidates {
                if seen.contains(&candidate) {
                    continue;
                }
                let valid = self.validator.validate(&candidate);
                let id = self.ids.next_id();
                tracing::debug!(
                    target: "emails_input::collection",
                    value = %candidate,
                    valid,
                    %id,
                    "appending item"
                );
                seen.insert(candidate.clone());
                items.push(EmailItem::new(id, candidate, valid));
                appended += 1;
            }
        }

        if appended > 0 {
            self.notify();
        }
    }

    /// Remove the item with the given identity.
    ///
    /// An identity the collection does not hold (including one already
    /// removed) is a silent no-op: no error, no notification. On success
    /// the remaining items keep their order and one notification carries
    /// the post-removal snapshot.
    pub fn remove_item(&self, id: ItemId) {
        self.affinity.debug_assert_same_thread();

        let removed = {
            let mut items = self.items.write();
            let before = items.len();
            items.retain(|item| item.id() != id);
            items.len() != before
        };

        if removed {
            tracing::debug!(target: "emails_input::collection", %id, "removed item");
            self.notify();
        }
    }

    /// Clear the collection and notify.
    ///
    /// Always emits exactly one notification with the empty snapshot, even
    /// when the collection was already empty. Subscribers can rely on the
    /// reset as a last-known-state broadcast rather than having to special-
    /// case it.
    pub fn reset(&self) {
        self.affinity.debug_assert_same_thread();

        self.items.write().clear();
        tracing::debug!(target: "emails_input::collection", "collection reset");
        self.notify();
    }

    /// Register a listener for every future change notification.
    ///
    /// Listeners run synchronously, in subscription order, with the
    /// snapshot of the mutation that triggered them. Subscribing the same
    /// listener twice registers it twice. The returned [`ConnectionId`] can
    /// be passed to [`Signal::disconnect`] on
    /// [`items_changed`](Self::items_changed).
    pub fn subscribe<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&[EmailItem]) + Send + Sync + 'static,
    {
        self.items_changed.connect(move |items: &Vec<EmailItem>| listener(items))
    }

    /// Open an ambient event stream for this collection.
    ///
    /// For hosts that prefer draining events over registering callbacks:
    /// every committed mutation sends one [`CollectionChanged`] carrying the
    /// same snapshot the direct subscribers observed. The channel is
    /// unbounded; dropping the receiver silently ends delivery to it.
    pub fn change_events(&self) -> crossbeam_channel::Receiver<CollectionChanged> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.items_changed.connect(move |items: &Vec<EmailItem>| {
            let _ = tx.send(CollectionChanged {
                items: items.clone(),
            });
        });
        rx
    }

    /// Emit one change notification with the current snapshot.
    fn notify(&self) {
        let snapshot = self.values();
        tracing::trace!(
            target: "emails_input::collection",
            len = snapshot.len(),
            "notifying subscribers"
        );
        self.items_changed.emit(snapshot);
    }
}

static_assertions::assert_impl_all!(EmailCollection: Send, Sync);
