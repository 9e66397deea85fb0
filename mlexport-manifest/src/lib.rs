//! Plan file parsing and validation for mlexport.
//!
//! A plan file describes an [`ExportPlan`](mlexport_ir::ExportPlan) on disk,
//! in TOML or JSON. Parsing validates identifiers and dataset shapes and
//! checks that every network's weight array resolves, reporting problems as
//! [`miette`] diagnostics pointing into the source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod plan;

pub use error::{Error, Result, SourceContext};
pub use plan::{Format, ModelSpec, NodeSpec, PairSpec, ParseContext, PlanFile, PlanHeader};
