//! Model capabilities read by generators.

use std::fmt;

use crate::PlanError;

/// A trained model embedded in an export plan.
///
/// Generators only read models. Whether a model can be reconstructed from a
/// factory description is an explicit capability exposed by [`as_factory`].
///
/// [`as_factory`]: TrainedModel::as_factory
pub trait TrainedModel: fmt::Debug + Send + Sync {
    /// Runtime type name, used in diagnostics.
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// The factory description of this model, if it has one.
    fn as_factory(&self) -> Option<&dyn FactoryModel> {
        None
    }
}

/// A model that a generic factory can re-create from a type name and an
/// architecture string.
pub trait FactoryModel {
    /// Factory type name (e.g., "feedforward").
    fn factory_type(&self) -> &str;

    /// Architecture descriptor understood by the factory.
    fn factory_architecture(&self) -> &str;
}

/// A model whose learned state can be flattened to a weight vector.
pub trait Encodable {
    /// Number of values produced by [`encode_to_array`](Encodable::encode_to_array).
    fn encoded_len(&self) -> usize;

    /// Flatten the learned state.
    fn encode_to_array(&self) -> Vec<f64>;

    /// Replace the learned state with `weights`.
    fn decode_from_array(&mut self, weights: &[f64]) -> Result<(), PlanError>;
}

/// A model described by factory type, architecture and weights.
#[derive(Debug, Clone, PartialEq)]
pub struct DescribedModel {
    factory_type: String,
    architecture: String,
    weights: Vec<f64>,
}

impl DescribedModel {
    pub fn new(
        factory_type: impl Into<String>,
        architecture: impl Into<String>,
        weights: Vec<f64>,
    ) -> Self {
        Self {
            factory_type: factory_type.into(),
            architecture: architecture.into(),
            weights,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl TrainedModel for DescribedModel {
    fn type_name(&self) -> &str {
        "DescribedModel"
    }

    fn as_factory(&self) -> Option<&dyn FactoryModel> {
        Some(self)
    }
}

impl FactoryModel for DescribedModel {
    fn factory_type(&self) -> &str {
        &self.factory_type
    }

    fn factory_architecture(&self) -> &str {
        &self.architecture
    }
}

impl Encodable for DescribedModel {
    fn encoded_len(&self) -> usize {
        self.weights.len()
    }

    fn encode_to_array(&self) -> Vec<f64> {
        self.weights.clone()
    }

    fn decode_from_array(&mut self, weights: &[f64]) -> Result<(), PlanError> {
        if weights.len() != self.weights.len() {
            return Err(PlanError::WeightCount {
                expected: self.weights.len(),
                actual: weights.len(),
            });
        }
        self.weights.copy_from_slice(weights);
        Ok(())
    }
}

/// A model known only by name, with no factory description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpaqueModel {
    type_name: String,
}

impl OpaqueModel {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
        }
    }
}

impl TrainedModel for OpaqueModel {
    fn type_name(&self) -> &str {
        &self.type_name
    }
}
