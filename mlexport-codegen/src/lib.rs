//! Shared code generation utilities for the mlexport generator.
//!
//! This crate provides language-agnostic abstractions and utilities
//! used by language-specific code generators (e.g., `mlexport-codegen-java`).
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`generation`] - Output helpers (ImportCollector, number formatting)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, SourceFile)
//! - [`testing`] - Test utilities (feature-gated)

pub mod builder;
mod error;
pub mod generation;
pub mod language;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use builder::{CodeBuilder, CodeFragment, FileBuilder, Indent, Renderable};
pub use error::{CodegenError, Result};
pub use generation::{DEFAULT_PRECISION, ImportCollector, format_number, join_numbers};
pub use language::{LanguageCodegen, SourceFile};
