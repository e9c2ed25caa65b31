//! Logging targets for the group box crates.
//!
//! All crates in the workspace log through the `tracing` crate. Nothing is
//! printed unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("groupbox=debug")
//!     .init();
//! ```

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "groupbox_core::signal";
    /// Checked/collapsed state changes.
    pub const STATE: &str = "groupbox::state";
    /// Pointer and keyboard interaction.
    pub const INPUT: &str = "groupbox::input";
    /// Painting.
    pub const PAINT: &str = "groupbox::paint";
    /// Child enablement/visibility propagation and resizing.
    pub const CHILDREN: &str = "groupbox::children";
    /// Configuration loading.
    pub const CONFIG: &str = "groupbox::config";
}
