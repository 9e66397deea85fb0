//! Java declaration builders.
//!
//! These provide a high-level API for constructing the Java syntax the
//! generator emits. Each builder implements [`Renderable`] so it can be
//! emitted into a `CodeBuilder` at any depth.
//!
//! [`Renderable`]: mlexport_codegen::Renderable

mod arrays;
mod fields;
mod methods;
mod statements;

pub use arrays::{DoubleArray, DoubleTable, TrainingTables, VALUES_PER_LINE};
pub use fields::StringConst;
pub use methods::{Class, Method};
pub use statements::{Call, Comment};
