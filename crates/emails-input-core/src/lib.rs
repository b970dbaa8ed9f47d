//! Core systems for the emails input control.
//!
//! This crate provides the foundational components the input control is
//! built on:
//!
//! - **Signal/Slot System**: Type-safe change notification with synchronous,
//!   subscription-ordered delivery
//! - **Item Identity**: Stable, never-reused identifiers for collection items
//! - **Thread Affinity**: Debug-build verification of the single-thread
//!   calling convention
//! - **Logging**: `tracing` targets for per-subsystem filtering
//!
//! # Signal/Slot Example
//!
//! ```
//! use emails_input_core::Signal;
//!
//! // Create a signal that notifies when a value changes
//! let value_changed = Signal::<i32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! // Emit the signal
//! value_changed.emit(42);
//!
//! // Disconnect when done
//! value_changed.disconnect(conn_id);
//! ```
//!
//! # Identity Example
//!
//! ```
//! use emails_input_core::IdentityGenerator;
//!
//! let ids = IdentityGenerator::new();
//! let first = ids.next_id();
//! let second = ids.next_id();
//! assert!(first < second);
//! ```

mod identity;
pub mod logging;
pub mod signal;
pub mod thread_check;

pub use identity::{IdentityGenerator, ItemId};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
pub use thread_check::ThreadAffinity;
