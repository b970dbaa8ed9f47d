//! Logging facilities for the emails input control.
//!
//! Instrumentation uses the `tracing` crate. To see logs, install a tracing
//! subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber;
//!
//! fn main() {
//!     // Initialize tracing (you can customize this)
//!     tracing_subscriber::fmt::init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Signal emissions log at `trace` level; collection mutations log at
//! `debug` level. Use the [`targets`] constants with `tracing` directives to
//! filter by subsystem, e.g. `RUST_LOG=emails_input::collection=debug`.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "emails_input_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "emails_input_core::signal";
    /// Collection controller target.
    pub const COLLECTION: &str = "emails_input::collection";
    /// Validator target.
    pub const VALIDATOR: &str = "emails_input::validator";
    /// View-side chip arena target.
    pub const VIEW: &str = "emails_input::view";
}
