//! Plan file types and parsing for `plan.toml` / `plan.json` files.

mod format;
mod lower;
mod node;
mod parse;
mod validate;

pub use format::Format;
pub use node::{ModelSpec, NodeSpec, PairSpec};
use serde::Deserialize;
pub use validate::ParseContext;

/// Root of a plan file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanFile {
    /// Optional `[plan]` header
    #[serde(default)]
    pub plan: PlanHeader,

    /// Root nodes, in emission order
    #[serde(default)]
    pub nodes: Vec<NodeSpec>,
}

/// The `[plan]` table.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanHeader {
    /// Output file, relative to the plan file. Defaults to `<Class>.java`.
    pub output: Option<String>,
}

impl PlanFile {
    /// Total number of nodes, counting nested children.
    pub fn node_count(&self) -> usize {
        fn count(nodes: &[NodeSpec]) -> usize {
            nodes.iter().map(|n| 1 + count(n.children())).sum()
        }
        count(&self.nodes)
    }
}
