// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for gosvc.
//!
//! This module contains pure logic with no I/O. Reading the resource tree,
//! writing files, rendering templates and running commands are all handled
//! via ports defined in the application layer.
//!
//! ## Contents
//!
//! - **Value objects**: [`ModulePath`], [`PostProcessCommand`]
//! - **Name deriver**: [`names::derive`] producing [`DerivedNames`]
//! - **Entities**: [`SubstitutionContext`], [`RenameTable`], resource entries
pub mod entities;
pub mod error;
pub mod names;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    EntryKind, RenameTable, ResourceEntry, ResourcePath, SubstitutionContext,
    context::keys,
    rename::SERVICE_PLACEHOLDER,
    resource::{TEMPLATE_SUFFIX, strip_template_suffix},
};
pub use error::{DomainError, ErrorCategory};
pub use names::{DerivedNames, derive};
pub use value_objects::{ModulePath, PostProcessCommand};
