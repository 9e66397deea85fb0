//! Serialized node definitions.

use mlexport_ir::DEFAULT_WEIGHTS_NAME;
use serde::Deserialize;

/// A node as written in a plan file, tagged by `kind`.
///
/// ```toml
/// [[nodes]]
/// kind = "class"
/// name = "XorExample"
///
/// [[nodes.children]]
/// kind = "init-array"
/// name = "WEIGHTS"
/// values = [0.5, -1.25, 2.0]
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum NodeSpec {
    Comment {
        text: String,
    },
    Class {
        name: String,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    MainFunction {
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    Const {
        name: String,
        value: String,
        #[serde(rename = "type", default = "default_const_type")]
        type_name: String,
    },
    StaticFunction {
        name: String,
        #[serde(default)]
        children: Vec<NodeSpec>,
    },
    /// `name();`, or `type var = name();` when both `type` and `var` are set.
    FunctionCall {
        name: String,
        #[serde(rename = "type", default)]
        type_name: Option<String>,
        #[serde(default)]
        var: Option<String>,
    },
    CreateNetwork {
        name: String,
        model: ModelSpec,
        #[serde(default = "default_weights")]
        weights: String,
    },
    InitArray {
        name: String,
        #[serde(default)]
        values: Vec<f64>,
    },
    EmbedTraining {
        #[serde(default)]
        pairs: Vec<PairSpec>,
    },
}

fn default_const_type() -> String {
    "String".to_string()
}

fn default_weights() -> String {
    DEFAULT_WEIGHTS_NAME.to_string()
}

/// The model a `create-network` node rebuilds.
///
/// Either `{ type = "feedforward", architecture = "..." }` or
/// `{ opaque = "SVM" }` for a model with no factory description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ModelSpec {
    Factory {
        #[serde(rename = "type")]
        factory_type: String,
        architecture: String,
    },
    Opaque {
        opaque: String,
    },
}

/// One training pair of an `embed-training` node.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PairSpec {
    pub input: Vec<f64>,
    pub ideal: Vec<f64>,
}

impl NodeSpec {
    /// The `kind` tag as written in the file.
    pub fn kind(&self) -> &'static str {
        match self {
            NodeSpec::Comment { .. } => "comment",
            NodeSpec::Class { .. } => "class",
            NodeSpec::MainFunction { .. } => "main-function",
            NodeSpec::Const { .. } => "const",
            NodeSpec::StaticFunction { .. } => "static-function",
            NodeSpec::FunctionCall { .. } => "function-call",
            NodeSpec::CreateNetwork { .. } => "create-network",
            NodeSpec::InitArray { .. } => "init-array",
            NodeSpec::EmbedTraining { .. } => "embed-training",
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            NodeSpec::Class { name, .. }
            | NodeSpec::Const { name, .. }
            | NodeSpec::StaticFunction { name, .. }
            | NodeSpec::FunctionCall { name, .. }
            | NodeSpec::CreateNetwork { name, .. }
            | NodeSpec::InitArray { name, .. } => Some(name),
            NodeSpec::Comment { .. }
            | NodeSpec::MainFunction { .. }
            | NodeSpec::EmbedTraining { .. } => None,
        }
    }

    pub fn children(&self) -> &[NodeSpec] {
        match self {
            NodeSpec::Class { children, .. }
            | NodeSpec::MainFunction { children }
            | NodeSpec::StaticFunction { children, .. } => children,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_defaults() {
        let node: NodeSpec = toml::from_str(
            r#"
            kind = "create-network"
            name = "createNetwork"
            model = { type = "feedforward", architecture = "?->2->?" }
            "#,
        )
        .unwrap();

        assert_eq!(
            node,
            NodeSpec::CreateNetwork {
                name: "createNetwork".to_string(),
                model: ModelSpec::Factory {
                    factory_type: "feedforward".to_string(),
                    architecture: "?->2->?".to_string(),
                },
                weights: "WEIGHTS".to_string(),
            }
        );
        assert_eq!(node.kind(), "create-network");
    }

    #[test]
    fn test_opaque_model() {
        let node: NodeSpec = serde_json::from_str(
            r#"{ "kind": "create-network", "name": "make", "model": { "opaque": "SVM" } }"#,
        )
        .unwrap();

        match node {
            NodeSpec::CreateNetwork { model, .. } => {
                assert_eq!(model, ModelSpec::Opaque { opaque: "SVM".to_string() });
            }
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn test_const_type_defaults_to_string() {
        let node: NodeSpec =
            toml::from_str("kind = \"const\"\nname = \"VERSION\"\nvalue = \"1.0\"\n").unwrap();
        assert_eq!(
            node,
            NodeSpec::Const {
                name: "VERSION".to_string(),
                value: "1.0".to_string(),
                type_name: "String".to_string(),
            }
        );
    }

    #[test]
    fn test_integer_values_read_as_doubles() {
        let node: NodeSpec =
            toml::from_str("kind = \"init-array\"\nname = \"W\"\nvalues = [1, -0.5, 2]\n")
                .unwrap();
        assert!(node.children().is_empty());
        match node {
            NodeSpec::InitArray { values, .. } => assert_eq!(values, vec![1.0, -0.5, 2.0]),
            other => panic!("unexpected node: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_kind_rejected() {
        let result: Result<NodeSpec, _> = toml::from_str("kind = \"loop\"\n");
        assert!(result.is_err());
    }
}
