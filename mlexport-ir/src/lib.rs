//! Export plan types for the mlexport code generator.
//!
//! An [`ExportPlan`] is a tree of [`ExportNode`]s describing the program to
//! emit: one class, its constants, embedded arrays and static methods. Plans
//! are built by a planner (or lowered from a plan file) and handed to a
//! language generator, which never mutates them.
//!
//! # Architecture
//!
//! ```text
//! plan.toml → mlexport-manifest (parsing) → mlexport-ir (ExportPlan) → codegen
//! ```
//!
//! The model and dataset a plan embeds are reached through capability
//! traits ([`TrainedModel`], [`FactoryModel`], [`Encodable`],
//! [`TrainingData`]) so generators depend only on what they read.

mod dataset;
mod error;
mod model;
mod plan;
mod validate;

pub use dataset::{BasicDataset, BasicPair, DataPair, IDEAL_TABLE, INPUT_TABLE, TrainingData};
pub use error::PlanError;
pub use model::{DescribedModel, Encodable, FactoryModel, OpaqueModel, TrainedModel};
pub use plan::{Binding, DEFAULT_WEIGHTS_NAME, ExportNode, ExportPlan, NodeKind};
