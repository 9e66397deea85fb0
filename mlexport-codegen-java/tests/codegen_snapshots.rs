//! Snapshot tests for Java code generation.
//!
//! These tests verify that the generated Java code matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::sync::Arc;

use mlexport_codegen_java::{Generator, LanguageCodegen};
use mlexport_ir::{BasicDataset, DescribedModel, ExportNode, ExportPlan};

fn xor_dataset() -> BasicDataset {
    BasicDataset::new()
        .with_pair(vec![0.0, 0.0], vec![0.0])
        .with_pair(vec![1.0, 0.0], vec![1.0])
        .with_pair(vec![0.0, 1.0], vec![1.0])
        .with_pair(vec![1.0, 1.0], vec![0.0])
}

fn generate(plan: &ExportPlan) -> String {
    Generator::new()
        .generate(plan)
        .expect("Failed to generate Java source")
}

#[test]
fn test_xor_example() {
    let weights = vec![
        0.5, -1.25, 2.0, 0.125, -0.75, 1.5, 3.0, -2.0, 0.25, 1.0, -0.5, 0.333, 0.0,
    ];
    let model = Arc::new(DescribedModel::new(
        "feedforward",
        "?:B->SIGMOID->2:B->SIGMOID->?",
        weights.clone(),
    ));

    let plan = ExportPlan::new(vec![
        ExportNode::comment("Code generated by mlexport"),
        ExportNode::class(
            "XorExample",
            vec![
                ExportNode::init_array("WEIGHTS", weights),
                ExportNode::embed_training(Arc::new(xor_dataset())),
                ExportNode::create_network("createNetwork", model),
                ExportNode::main_function(vec![ExportNode::call_into(
                    "createNetwork",
                    "MLMethod",
                    "method",
                )]),
            ],
        ),
    ]);

    insta::assert_snapshot!("xor_example", generate(&plan));
}

#[test]
fn test_constants_and_functions() {
    let model = Arc::new(DescribedModel::new("rbfnetwork", "?->GAUSSIAN(c=4)->?", vec![]));

    let plan = ExportPlan::new(vec![ExportNode::class(
        "Runner",
        vec![
            ExportNode::constant("VERSION", "1.0", "String"),
            ExportNode::constant("RATE", "0.01", "double"),
            ExportNode::init_array("TRAINED", vec![0.1, 0.2, 0.3]),
            ExportNode::static_function(
                "train",
                vec![
                    ExportNode::call("prepare"),
                    ExportNode::call_into("createNetwork", "MLMethod", "network"),
                ],
            ),
            ExportNode::create_network_from("createNetwork", model, "TRAINED"),
            ExportNode::main_function(vec![ExportNode::call("train")]),
        ],
    )]);

    insta::assert_snapshot!("constants_and_functions", generate(&plan));
}
