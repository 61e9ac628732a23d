//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "mirror the skeleton" or "generate a service".

pub mod generate_service;
pub mod materializer;

#[cfg(test)]
mod testing;

pub use generate_service::{GenerateReport, GenerateRequest, GenerateService};
pub use materializer::{MaterializeReport, TemplateMaterializer};
