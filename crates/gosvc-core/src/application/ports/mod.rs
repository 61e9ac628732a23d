//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `gosvc-adapters` implement these.
//!
//! All ports here are **driven (output) ports**: called by the application,
//! implemented by infrastructure.
//!   - `ResourceTree`: skeleton files to copy
//!   - `Filesystem`: destination writes
//!   - `TemplateRenderer`: variable substitution
//!   - `CommandRunner`: post-processing commands

pub mod output;

pub use output::{CommandRunner, Filesystem, ResourceTree, TemplateRenderer};

#[cfg(test)]
pub use output::MockCommandRunner;
