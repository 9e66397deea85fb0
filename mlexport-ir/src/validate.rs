//! Cross-node reference checks for export plans.
//!
//! Generators trust the plan; these checks are run by whoever builds it.

use std::collections::HashSet;

use crate::{ExportNode, ExportPlan, IDEAL_TABLE, INPUT_TABLE, PlanError};

impl ExportPlan {
    /// Check that every network finds its weight array and that no scope
    /// declares the same field twice.
    ///
    /// Embedded training data declares the `INPUT_DATA` and `IDEAL_DATA`
    /// tables, so it counts as two declarations.
    ///
    /// A network's weights must be an `InitArray` declared directly in the
    /// nearest enclosing class (or at the top level when there is none).
    pub fn check_references(&self) -> Result<(), PlanError> {
        check_scope(self.nodes(), self.nodes(), "the top level")
    }
}

fn check_scope(
    nodes: &[ExportNode],
    class_body: &[ExportNode],
    scope: &str,
) -> Result<(), PlanError> {
    let mut declared = HashSet::new();
    for node in nodes {
        let names = match node {
            ExportNode::Const { name, .. } | ExportNode::InitArray { name, .. } => {
                vec![name.as_str()]
            }
            ExportNode::EmbedTraining { .. } => vec![INPUT_TABLE, IDEAL_TABLE],
            _ => continue,
        };
        for name in names {
            if !declared.insert(name) {
                return Err(PlanError::DuplicateName {
                    name: name.to_string(),
                    scope: scope.to_string(),
                });
            }
        }
    }

    for node in nodes {
        match node {
            ExportNode::Class { name, children } => {
                check_scope(children, children, &format!("class '{name}'"))?;
            }
            ExportNode::MainFunction { children } => {
                check_scope(children, class_body, &format!("{scope} (main)"))?;
            }
            ExportNode::StaticFunction { name, children } => {
                check_scope(children, class_body, &format!("{scope} ({name})"))?;
            }
            ExportNode::CreateNetwork { name, weights, .. } => {
                let found = class_body.iter().any(|n| {
                    matches!(n, ExportNode::InitArray { name: array, .. } if array == weights)
                });
                if !found {
                    return Err(PlanError::MissingWeights {
                        network: name.clone(),
                        weights: weights.clone(),
                        scope: scope.to_string(),
                    });
                }
            }
            ExportNode::Comment { .. }
            | ExportNode::Const { .. }
            | ExportNode::FunctionCall { .. }
            | ExportNode::InitArray { .. }
            | ExportNode::EmbedTraining { .. } => {}
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{BasicDataset, DescribedModel, TrainedModel, TrainingData};

    fn model() -> Arc<dyn TrainedModel> {
        Arc::new(DescribedModel::new("feedforward", "2:B->1", vec![0.0; 3]))
    }

    fn dataset() -> Arc<dyn TrainingData> {
        Arc::new(BasicDataset::new().with_pair(vec![0.0, 1.0], vec![1.0]))
    }

    #[test]
    fn test_network_with_sibling_weights() {
        let plan = ExportPlan::new(vec![ExportNode::class(
            "Net",
            vec![
                ExportNode::init_array("WEIGHTS", vec![0.0; 3]),
                ExportNode::create_network("createNetwork", model()),
            ],
        )]);
        assert_eq!(plan.check_references(), Ok(()));
    }

    #[test]
    fn test_weights_declared_after_network() {
        let plan = ExportPlan::new(vec![ExportNode::class(
            "Net",
            vec![
                ExportNode::create_network("createNetwork", model()),
                ExportNode::init_array("WEIGHTS", vec![0.0; 3]),
            ],
        )]);
        assert!(plan.check_references().is_ok());
    }

    #[test]
    fn test_missing_weights() {
        let plan = ExportPlan::new(vec![ExportNode::class(
            "Net",
            vec![ExportNode::create_network_from("createNetwork", model(), "W2")],
        )]);
        let err = plan.check_references().unwrap_err();
        assert_eq!(
            err,
            PlanError::MissingWeights {
                network: "createNetwork".into(),
                weights: "W2".into(),
                scope: "class 'Net'".into(),
            }
        );
    }

    #[test]
    fn test_weights_in_other_class_do_not_count() {
        let plan = ExportPlan::new(vec![
            ExportNode::class("A", vec![ExportNode::init_array("WEIGHTS", vec![])]),
            ExportNode::class("B", vec![ExportNode::create_network("createNetwork", model())]),
        ]);
        assert!(matches!(
            plan.check_references(),
            Err(PlanError::MissingWeights { .. })
        ));
    }

    #[test]
    fn test_const_is_not_an_array() {
        let plan = ExportPlan::new(vec![ExportNode::class(
            "Net",
            vec![
                ExportNode::constant("WEIGHTS", "1,2,3", "String"),
                ExportNode::create_network("createNetwork", model()),
            ],
        )]);
        assert!(plan.check_references().is_err());
    }

    #[test]
    fn test_duplicate_constant() {
        let plan = ExportPlan::new(vec![ExportNode::class(
            "Net",
            vec![
                ExportNode::init_array("WEIGHTS", vec![]),
                ExportNode::constant("WEIGHTS", "x", "String"),
            ],
        )]);
        assert_eq!(
            plan.check_references(),
            Err(PlanError::DuplicateName {
                name: "WEIGHTS".into(),
                scope: "class 'Net'".into(),
            })
        );
    }

    #[test]
    fn test_training_embedded_twice() {
        let plan = ExportPlan::new(vec![ExportNode::class(
            "Net",
            vec![
                ExportNode::embed_training(dataset()),
                ExportNode::embed_training(dataset()),
            ],
        )]);
        assert_eq!(
            plan.check_references(),
            Err(PlanError::DuplicateName {
                name: "INPUT_DATA".into(),
                scope: "class 'Net'".into(),
            })
        );
    }

    #[test]
    fn test_array_shadows_training_table() {
        let plan = ExportPlan::new(vec![ExportNode::class(
            "Net",
            vec![
                ExportNode::init_array("IDEAL_DATA", vec![1.0]),
                ExportNode::embed_training(dataset()),
            ],
        )]);
        assert_eq!(
            plan.check_references(),
            Err(PlanError::DuplicateName {
                name: "IDEAL_DATA".into(),
                scope: "class 'Net'".into(),
            })
        );
    }

    #[test]
    fn test_training_in_separate_classes() {
        let plan = ExportPlan::new(vec![
            ExportNode::class("A", vec![ExportNode::embed_training(dataset())]),
            ExportNode::class("B", vec![ExportNode::embed_training(dataset())]),
        ]);
        assert!(plan.check_references().is_ok());
    }
}
