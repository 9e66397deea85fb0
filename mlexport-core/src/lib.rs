//! Core utilities and types for the mlexport code generator.
//!
//! This crate provides file writing and identifier helpers shared by the
//! generator, plan file parser and CLI.

mod file;
mod utils;

// File operations
pub use file::{FileRules, GeneratedFile, Overwrite, WriteResult};
// String utilities
pub use utils::{JAVA_KEYWORDS, identifier_error, is_java_keyword};
