//! Core systems for the group box widget.
//!
//! This crate provides the pieces the widget crate builds on:
//!
//! - [`Signal`] - type-safe notifications with connectable slots
//! - [`Error`] - the error type shared by the configuration layer
//! - [`logging`] - tracing targets used across the workspace
//!
//! # Example
//!
//! ```
//! use groupbox_core::Signal;
//!
//! let toggled = Signal::<bool>::new();
//! toggled.connect(|&checked| println!("checked = {checked}"));
//! toggled.emit(true);
//! ```

pub mod error;
pub mod logging;
pub mod signal;

pub use error::{Error, Result};
pub use signal::{ConnectionGuard, ConnectionId, Signal};
