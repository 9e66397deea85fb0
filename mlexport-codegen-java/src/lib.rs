//! Java code generator for mlexport plans.
//!
//! [`Generator`] walks an [`ExportPlan`](mlexport_ir::ExportPlan) and emits a
//! single Java source unit: imports first, then the class body.

mod generator;
mod literal;
mod render;

pub mod ast;

pub use ast::{
    Call, Class, Comment, DoubleArray, DoubleTable, Method, StringConst, TrainingTables,
    VALUES_PER_LINE,
};
pub use generator::Generator;
pub use literal::string_literal;
pub use mlexport_codegen::LanguageCodegen;
pub use render::{JavaFileBuilder, render_imports};
