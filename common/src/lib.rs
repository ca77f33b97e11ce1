//! Shared types for `mksnmp`: the device record model, scan targets,
//! run configuration and the error taxonomy used across the workspace.

pub mod config;
pub mod device;
pub mod error;
pub mod macros;
pub mod network;

#[doc(hidden)]
pub use tracing as __tracing;
