//! Lowering of parsed plan files into export plans.

use std::sync::Arc;

use mlexport_ir::{
    BasicDataset, DescribedModel, ExportNode, ExportPlan, OpaqueModel, TrainedModel,
};

use super::{ModelSpec, NodeSpec, PairSpec, PlanFile};

impl PlanFile {
    /// Build the export plan this file describes.
    pub fn to_plan(&self) -> ExportPlan {
        ExportPlan::new(lower_nodes(&self.nodes))
    }
}

fn lower_nodes(nodes: &[NodeSpec]) -> Vec<ExportNode> {
    nodes.iter().map(lower_node).collect()
}

fn lower_node(node: &NodeSpec) -> ExportNode {
    match node {
        NodeSpec::Comment { text } => ExportNode::comment(text.as_str()),
        NodeSpec::Class { name, children } => {
            ExportNode::class(name.as_str(), lower_nodes(children))
        }
        NodeSpec::MainFunction { children } => ExportNode::main_function(lower_nodes(children)),
        NodeSpec::Const {
            name,
            value,
            type_name,
        } => ExportNode::constant(name.as_str(), value.as_str(), type_name.as_str()),
        NodeSpec::StaticFunction { name, children } => {
            ExportNode::static_function(name.as_str(), lower_nodes(children))
        }
        NodeSpec::FunctionCall {
            name,
            type_name: Some(type_name),
            var: Some(var),
        } => ExportNode::call_into(name.as_str(), type_name.as_str(), var.as_str()),
        NodeSpec::FunctionCall { name, .. } => ExportNode::call(name.as_str()),
        NodeSpec::CreateNetwork {
            name,
            model,
            weights,
        } => ExportNode::create_network_from(name.as_str(), lower_model(model), weights.as_str()),
        NodeSpec::InitArray { name, values } => {
            ExportNode::init_array(name.as_str(), values.clone())
        }
        NodeSpec::EmbedTraining { pairs } => {
            ExportNode::embed_training(Arc::new(lower_dataset(pairs)))
        }
    }
}

fn lower_model(model: &ModelSpec) -> Arc<dyn TrainedModel> {
    match model {
        ModelSpec::Factory {
            factory_type,
            architecture,
        } => Arc::new(DescribedModel::new(
            factory_type.as_str(),
            architecture.as_str(),
            Vec::new(),
        )),
        ModelSpec::Opaque { opaque } => Arc::new(OpaqueModel::new(opaque.as_str())),
    }
}

fn lower_dataset(pairs: &[PairSpec]) -> BasicDataset {
    let mut dataset = BasicDataset::new();
    for pair in pairs {
        dataset.push(pair.input.clone(), pair.ideal.clone());
    }
    dataset
}
