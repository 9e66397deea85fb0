//! Export plan tree.

use std::{fmt, sync::Arc};

use crate::{Encodable, TrainedModel, TrainingData};

/// Name of the weight array a network loads from unless told otherwise.
pub const DEFAULT_WEIGHTS_NAME: &str = "WEIGHTS";

/// A variable binding for a function call result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// Declared type of the variable.
    pub type_name: String,
    /// Variable name.
    pub var_name: String,
}

/// One node of an export plan.
///
/// Each variant carries exactly the data its emission needs. Block variants
/// (`Class`, `MainFunction`, `StaticFunction`) own their children.
#[derive(Debug, Clone)]
pub enum ExportNode {
    /// A single-line comment.
    Comment { text: String },
    /// The top-level class.
    Class {
        name: String,
        children: Vec<ExportNode>,
    },
    /// The program entry point.
    MainFunction { children: Vec<ExportNode> },
    /// A string constant. The value is always emitted as a string literal.
    Const {
        name: String,
        value: String,
        type_name: String,
    },
    /// A parameterless static method.
    StaticFunction {
        name: String,
        children: Vec<ExportNode>,
    },
    /// A call to a parameterless function, optionally binding its result.
    FunctionCall {
        name: String,
        binding: Option<Binding>,
    },
    /// A method that rebuilds `model` from its factory description and loads
    /// the array constant named `weights` into it.
    CreateNetwork {
        name: String,
        model: Arc<dyn TrainedModel>,
        weights: String,
    },
    /// A `double[]` constant.
    InitArray { name: String, values: Vec<f64> },
    /// `INPUT_DATA` / `IDEAL_DATA` constants holding a training set.
    EmbedTraining { dataset: Arc<dyn TrainingData> },
}

/// Discriminant of an [`ExportNode`], for logging and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Comment,
    Class,
    MainFunction,
    Const,
    StaticFunction,
    FunctionCall,
    CreateNetwork,
    InitArray,
    EmbedTraining,
}

impl NodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Comment => "comment",
            NodeKind::Class => "class",
            NodeKind::MainFunction => "main-function",
            NodeKind::Const => "const",
            NodeKind::StaticFunction => "static-function",
            NodeKind::FunctionCall => "function-call",
            NodeKind::CreateNetwork => "create-network",
            NodeKind::InitArray => "init-array",
            NodeKind::EmbedTraining => "embed-training",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ExportNode {
    pub fn comment(text: impl Into<String>) -> Self {
        Self::Comment { text: text.into() }
    }

    pub fn class(name: impl Into<String>, children: Vec<ExportNode>) -> Self {
        Self::Class {
            name: name.into(),
            children,
        }
    }

    pub fn main_function(children: Vec<ExportNode>) -> Self {
        Self::MainFunction { children }
    }

    pub fn constant(
        name: impl Into<String>,
        value: impl Into<String>,
        type_name: impl Into<String>,
    ) -> Self {
        Self::Const {
            name: name.into(),
            value: value.into(),
            type_name: type_name.into(),
        }
    }

    pub fn static_function(name: impl Into<String>, children: Vec<ExportNode>) -> Self {
        Self::StaticFunction {
            name: name.into(),
            children,
        }
    }

    /// `name();`
    pub fn call(name: impl Into<String>) -> Self {
        Self::FunctionCall {
            name: name.into(),
            binding: None,
        }
    }

    /// `type_name var_name = name();`
    pub fn call_into(
        name: impl Into<String>,
        type_name: impl Into<String>,
        var_name: impl Into<String>,
    ) -> Self {
        Self::FunctionCall {
            name: name.into(),
            binding: Some(Binding {
                type_name: type_name.into(),
                var_name: var_name.into(),
            }),
        }
    }

    /// A network factory method loading from [`DEFAULT_WEIGHTS_NAME`].
    pub fn create_network(name: impl Into<String>, model: Arc<dyn TrainedModel>) -> Self {
        Self::create_network_from(name, model, DEFAULT_WEIGHTS_NAME)
    }

    pub fn create_network_from(
        name: impl Into<String>,
        model: Arc<dyn TrainedModel>,
        weights: impl Into<String>,
    ) -> Self {
        Self::CreateNetwork {
            name: name.into(),
            model,
            weights: weights.into(),
        }
    }

    pub fn init_array(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self::InitArray {
            name: name.into(),
            values,
        }
    }

    /// An array holding the encoded weights of `model`.
    pub fn weights_of(name: impl Into<String>, model: &dyn Encodable) -> Self {
        Self::init_array(name, model.encode_to_array())
    }

    pub fn embed_training(dataset: Arc<dyn TrainingData>) -> Self {
        Self::EmbedTraining { dataset }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Comment { .. } => NodeKind::Comment,
            Self::Class { .. } => NodeKind::Class,
            Self::MainFunction { .. } => NodeKind::MainFunction,
            Self::Const { .. } => NodeKind::Const,
            Self::StaticFunction { .. } => NodeKind::StaticFunction,
            Self::FunctionCall { .. } => NodeKind::FunctionCall,
            Self::CreateNetwork { .. } => NodeKind::CreateNetwork,
            Self::InitArray { .. } => NodeKind::InitArray,
            Self::EmbedTraining { .. } => NodeKind::EmbedTraining,
        }
    }

    /// Declared name, for kinds that declare one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Class { name, .. }
            | Self::Const { name, .. }
            | Self::StaticFunction { name, .. }
            | Self::FunctionCall { name, .. }
            | Self::CreateNetwork { name, .. }
            | Self::InitArray { name, .. } => Some(name),
            Self::Comment { .. } | Self::MainFunction { .. } | Self::EmbedTraining { .. } => None,
        }
    }

    /// Body nodes. Empty for kinds without a body scope.
    pub fn children(&self) -> &[ExportNode] {
        match self {
            Self::Class { children, .. }
            | Self::MainFunction { children }
            | Self::StaticFunction { children, .. } => children,
            _ => &[],
        }
    }
}

/// The complete description of one generated program.
#[derive(Debug, Clone, Default)]
pub struct ExportPlan {
    nodes: Vec<ExportNode>,
}

impl ExportPlan {
    pub fn new(nodes: Vec<ExportNode>) -> Self {
        Self { nodes }
    }

    /// Top-level nodes in emission order.
    pub fn nodes(&self) -> &[ExportNode] {
        &self.nodes
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[ExportNode]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.nodes)
    }

    /// Names of all top-level classes.
    pub fn class_names(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .filter(|n| n.kind() == NodeKind::Class)
            .filter_map(ExportNode::name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BasicDataset, DescribedModel};

    fn sample_plan() -> ExportPlan {
        let model = Arc::new(DescribedModel::new("feedforward", "2:B->1", vec![0.1, 0.2]));
        ExportPlan::new(vec![
            ExportNode::comment("generated"),
            ExportNode::class(
                "Xor",
                vec![
                    ExportNode::weights_of(DEFAULT_WEIGHTS_NAME, model.as_ref()),
                    ExportNode::embed_training(Arc::new(BasicDataset::new())),
                    ExportNode::create_network("createNetwork", model),
                    ExportNode::main_function(vec![ExportNode::call_into(
                        "createNetwork",
                        "MLMethod",
                        "method",
                    )]),
                ],
            ),
        ])
    }

    #[test]
    fn test_node_count_is_recursive() {
        assert_eq!(sample_plan().node_count(), 7);
    }

    #[test]
    fn test_class_names() {
        assert_eq!(sample_plan().class_names(), vec!["Xor"]);
    }

    #[test]
    fn test_weights_of_encodes_model() {
        let model = DescribedModel::new("feedforward", "2:B->1", vec![1.5, 2.5]);
        match ExportNode::weights_of("W", &model) {
            ExportNode::InitArray { name, values } => {
                assert_eq!(name, "W");
                assert_eq!(values, vec![1.5, 2.5]);
            }
            other => panic!("Expected InitArray, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_create_network_defaults_to_weights() {
        let model = Arc::new(DescribedModel::new("feedforward", "2:B->1", vec![]));
        match ExportNode::create_network("createNetwork", model) {
            ExportNode::CreateNetwork { weights, .. } => assert_eq!(weights, "WEIGHTS"),
            other => panic!("Expected CreateNetwork, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(NodeKind::InitArray.to_string(), "init-array");
        assert_eq!(ExportNode::call("run").kind(), NodeKind::FunctionCall);
    }

    #[test]
    fn test_children_of_leaf_is_empty() {
        assert!(ExportNode::comment("x").children().is_empty());
        assert_eq!(ExportNode::call("run").name(), Some("run"));
    }
}
