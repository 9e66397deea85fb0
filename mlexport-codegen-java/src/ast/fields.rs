//! Constant field declarations.

use mlexport_codegen::{CodeFragment, Renderable};

use crate::string_literal;

/// A `public static final` constant whose value is written as a string
/// literal, whatever its declared type.
#[derive(Debug, Clone)]
pub struct StringConst<'a> {
    type_name: &'a str,
    name: &'a str,
    value: &'a str,
}

impl<'a> StringConst<'a> {
    pub fn new(type_name: &'a str, name: &'a str, value: &'a str) -> Self {
        Self {
            type_name,
            name,
            value,
        }
    }
}

impl Renderable for StringConst<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "public static final {} {} = {};",
            self.type_name,
            self.name,
            string_literal(self.value)
        ))]
    }
}
