//! Domain entities

pub mod context;
pub mod rename;
pub mod resource;

pub use context::SubstitutionContext;
pub use rename::RenameTable;
pub use resource::{EntryKind, ResourceEntry, ResourcePath};
