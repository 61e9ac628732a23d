//! Application layer for gosvc.
//!
//! This layer contains:
//! - **Services**: the template materializer and the generate workflow
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! Name derivation and the rename rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{GenerateReport, GenerateRequest, GenerateService, MaterializeReport, TemplateMaterializer};

pub use ports::{CommandRunner, Filesystem, ResourceTree, TemplateRenderer};

pub use error::{ApplicationError, RenderFailure, TemplateErrorKind};
