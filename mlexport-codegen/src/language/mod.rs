//! Language-specific abstractions.
//!
//! This module provides traits and types for language-specific code generation:
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`SourceFile`] - A generated source file ready to be written

mod traits;

pub use traits::{LanguageCodegen, SourceFile};
