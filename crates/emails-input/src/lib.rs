//! An email address input control.
//!
//! This crate implements the logic of a multi-email entry field: the user
//! types, pastes, or programmatically supplies raw text, and the control
//! turns it into a deduplicated, validated, ordered collection of email
//! items with change notification. Rendering, styling, and raw event
//! capture are left to the hosting environment, which integrates through
//! three seams:
//!
//! - deliver raw text to [`EmailsInput::commit_input`] (or
//!   [`EmailsInput::add`]) from its keyboard/paste machinery,
//! - observe state through [`EmailsInput::subscribe`] or the ambient
//!   [`EmailsInput::change_events`] stream,
//! - map item identities to render nodes with [`ChipArena`].
//!
//! # Core Types
//!
//! - [`EmailsInput`]: the construction-time surface a host talks to
//! - [`EmailCollection`]: the collection controller (parsing, dedup,
//!   validation, notification)
//! - [`EmailItem`]: one entry (value, validity, identity)
//! - [`EmailValidator`]: pattern-based candidate validation
//! - [`ChipArena`]: view-side arena mapping identities to chip nodes
//!
//! # Example
//!
//! ```
//! use emails_input::{EmailsInput, EmailsInputOptions};
//!
//! let input = EmailsInput::new(
//!     EmailsInputOptions::new().with_placeholder("add more people…"),
//! )
//! .unwrap();
//!
//! input.subscribe(|items| {
//!     let valid = items.iter().filter(|item| item.is_valid()).count();
//!     println!("{} item(s), {} valid", items.len(), valid);
//! });
//!
//! // Pasted blobs are split on commas, trimmed, and deduplicated.
//! input.commit_input("ada@example.com, , grace@example.com, ada@example.com");
//! assert_eq!(input.values().len(), 2);
//! ```

mod collection;
mod config;
mod error;
mod item;
mod validator;
mod view;
mod widget;

pub use collection::{CollectionChanged, EmailCollection, RawInput};
pub use config::{EmailsInputOptions, PatternConfig};
pub use error::{InputError, Result};
pub use item::EmailItem;
pub use validator::{EmailValidator, Validator, DEFAULT_EMAIL_PATTERN};
pub use view::{ChipArena, ChipKey, EmailChip};
pub use widget::EmailsInput;

/// Convenience re-exports for the common integration surface.
pub mod prelude {
    pub use crate::{
        ChipArena, EmailCollection, EmailItem, EmailValidator, EmailsInput, EmailsInputOptions,
        PatternConfig, RawInput, Validator,
    };
    pub use emails_input_core::{ConnectionId, ItemId, Signal};
}
