//! Single-line statements.

use mlexport_codegen::{CodeFragment, Renderable};
use mlexport_ir::Binding;

/// `// text`
#[derive(Debug, Clone)]
pub struct Comment<'a>(pub &'a str);

impl Renderable for Comment<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!("// {}", self.0))]
    }
}

/// A call to a parameterless function, optionally assigned to a new local.
#[derive(Debug, Clone)]
pub struct Call<'a> {
    name: &'a str,
    binding: Option<&'a Binding>,
}

impl<'a> Call<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            binding: None,
        }
    }

    /// Assign the result. A binding with an empty type is ignored.
    pub fn bind(mut self, binding: Option<&'a Binding>) -> Self {
        self.binding = binding.filter(|b| !b.type_name.is_empty());
        self
    }
}

impl Renderable for Call<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let line = match self.binding {
            Some(b) => format!("{} {} = {}();", b.type_name, b.var_name, self.name),
            None => format!("{}();", self.name),
        };
        vec![CodeFragment::line(line)]
    }
}
