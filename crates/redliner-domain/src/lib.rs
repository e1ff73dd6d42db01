//! Redliner Domain Layer
//!
//! This crate contains the core domain model for Redliner, the playbook review
//! engine. It has ZERO external dependencies and defines the value objects and
//! trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Playbook**: the reference policy text a document is checked against
//! - **Chunk**: a bounded, sentence-aligned segment of playbook text
//! - **Analysis result**: conflicts, gaps and irrelevant content, never empty
//!
//! ## Architecture
//!
//! - No external crate dependencies
//! - Capabilities (sentence segmentation, embedding, text completion) are traits
//! - Infrastructure implementations live in other crates

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod chunk;
pub mod traits;

// Re-exports for convenience
pub use analysis::{AnalysisResult, Section};
pub use chunk::Chunk;
