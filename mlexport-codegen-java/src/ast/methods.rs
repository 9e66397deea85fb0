//! Class and static method declarations.

use mlexport_codegen::{CodeFragment, Renderable};

/// A public top-level class. Only the header is built here; the generator
/// writes the body.
#[derive(Debug, Clone)]
pub struct Class<'a> {
    name: &'a str,
}

impl<'a> Class<'a> {
    pub fn new(name: &'a str) -> Self {
        Self { name }
    }

    /// `public class Name {`
    pub fn header(&self) -> String {
        format!("public class {} {{", self.name)
    }
}

/// Builder for `public static` methods.
#[derive(Debug, Clone)]
pub struct Method {
    name: String,
    return_type: String,
    params: Vec<String>,
    body: Vec<String>,
}

impl Method {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: "void".to_string(),
            params: Vec::new(),
            body: Vec::new(),
        }
    }

    /// The `main(String[] args)` entry point.
    pub fn main() -> Self {
        Self::new("main").param("String[] args")
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.return_type = ty.into();
        self
    }

    /// Add a parameter, written as `Type name`.
    pub fn param(mut self, param: impl Into<String>) -> Self {
        self.params.push(param.into());
        self
    }

    /// Add a line to the method body.
    pub fn statement(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// `public static Ret name(params) {`
    pub fn header(&self) -> String {
        format!(
            "public static {} {}({}) {{",
            self.return_type,
            self.name,
            self.params.join(", ")
        )
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::block(
            self.header(),
            self.body.iter().cloned().map(CodeFragment::line).collect(),
            "}",
        )]
    }
}
