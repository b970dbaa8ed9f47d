//! The emails input control surface.
//!
//! [`EmailsInput`] is what a hosting environment constructs and talks to. It
//! owns the collection controller, applies the input-capture bound
//! (`max_length`) to raw text before the controller sees it, and re-exposes
//! the controller's query/mutation/subscription surface. Rendering and event
//! capture stay external: a view layer subscribes like any other listener
//! (see [`ChipArena`](crate::ChipArena)) and delivers raw text to
//! [`commit_input`](Self::commit_input) from whatever keyboard or paste
//! machinery the host has.
//!
//! # Example
//!
//! ```
//! use emails_input::{EmailsInput, EmailsInputOptions};
//!
//! let input = EmailsInput::new(EmailsInputOptions::new()).unwrap();
//!
//! input.subscribe(|items| {
//!     println!("now {} item(s)", items.len());
//! });
//!
//! let items = input.add("ada@example.com, grace@example.com");
//! assert_eq!(items.len(), 2);
//!
//! input.reset();
//! assert!(input.values().is_empty());
//! ```

use emails_input_core::ConnectionId;

use crate::collection::{CollectionChanged, EmailCollection, RawInput};
use crate::config::EmailsInputOptions;
use crate::error::Result;
use crate::item::EmailItem;

/// The public surface of the emails input control.
pub struct EmailsInput {
    collection: EmailCollection,
    options: EmailsInputOptions,
}

impl EmailsInput {
    /// Construct the control from options.
    ///
    /// Fails if the configured validation pattern does not compile; a
    /// malformed pattern is a configuration error, never a silent fallback
    /// to disabled validation.
    pub fn new(options: EmailsInputOptions) -> Result<Self> {
        let validator = options.build_validator()?;
        Ok(Self {
            collection: EmailCollection::with_validator(validator),
            options,
        })
    }

    /// The collection controller behind this control.
    ///
    /// Exposed for hosts that want the full controller surface, e.g.
    /// [`EmailCollection::remove_item`] for chip-close buttons or the
    /// [`items_changed`](EmailCollection::items_changed) signal directly.
    pub fn collection(&self) -> &EmailCollection {
        &self.collection
    }

    /// The options this control was constructed with.
    pub fn options(&self) -> &EmailsInputOptions {
        &self.options
    }

    /// Returns an independent snapshot of the collection in insertion order.
    pub fn values(&self) -> Vec<EmailItem> {
        self.collection.values()
    }

    /// Add raw input, then return the resulting snapshot.
    pub fn add<I: Into<RawInput>>(&self, input: I) -> Vec<EmailItem> {
        self.collection.add_items(input);
        self.collection.values()
    }

    /// Clear the collection. Always notifies, even when already empty.
    pub fn reset(&self) {
        self.collection.reset();
    }

    /// Register a listener for every future change notification.
    pub fn subscribe<F>(&self, listener: F) -> ConnectionId
    where
        F: Fn(&[EmailItem]) + Send + Sync + 'static,
    {
        self.collection.subscribe(listener)
    }

    /// The input-capture boundary: hand one raw string to the controller.
    ///
    /// Keyboard and paste handlers deliver their text here. When
    /// `max_length` is configured, the raw string is truncated to that many
    /// characters first; the collection itself never enforces the bound.
    pub fn commit_input(&self, raw: &str) {
        let bounded = match self.options.max_length {
            Some(max) if raw.chars().count() > max => {
                tracing::debug!(
                    target: "emails_input::collection",
                    max,
                    "raw input exceeds max_length; truncating"
                );
                raw.chars().take(max).collect::<String>()
            }
            _ => raw.to_string(),
        };
        self.collection.add_items(bounded);
    }

    /// Open an ambient event stream carrying the same snapshots direct
    /// subscribers observe. See [`EmailCollection::change_events`].
    pub fn change_events(&self) -> crossbeam_channel::Receiver<CollectionChanged> {
        self.collection.change_events()
    }
}

static_assertions::assert_impl_all!(EmailsInput: Send, Sync);
