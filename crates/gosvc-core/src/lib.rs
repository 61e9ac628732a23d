//! Gosvc Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the gosvc
//! Go service generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │             gosvc-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │ (GenerateService, TemplateMaterializer) │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Application Ports (Traits)       │
//! │ (ResourceTree, Filesystem, Renderer,    │
//! │  CommandRunner)                         │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     gosvc-adapters (Infrastructure)     │
//! │ (EmbeddedResources, LocalFilesystem,    │
//! │ HandlebarsRenderer, SystemCommandRunner)│
//! └─────────────────────────────────────────┘
//!
//!            Domain Layer (Pure Logic)
//!   (ModulePath, DerivedNames, SubstitutionContext, RenameTable)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use gosvc_core::application::{GenerateRequest, GenerateService};
//!
//! let service = GenerateService::new(resources, filesystem, renderer, runner);
//! let report = service.generate(&GenerateRequest::new("github.com/acme/ledger", "."))?;
//! println!("created {}", report.destination.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateRequest, GenerateService, MaterializeReport, TemplateMaterializer,
        ports::{CommandRunner, Filesystem, ResourceTree, TemplateRenderer},
    };
    pub use crate::domain::{
        DerivedNames, ModulePath, PostProcessCommand, RenameTable, ResourceEntry, ResourcePath,
        SubstitutionContext, derive,
    };
    pub use crate::error::{GosvcError, GosvcResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
