//! Validation context and checks run after a plan file is parsed.

use std::sync::Arc;

use miette::SourceSpan;
use mlexport_core::{identifier_error, is_java_keyword};

use super::{ModelSpec, NodeSpec, PairSpec};
use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the plan's block nesting, making it easier to pass validation
/// context through recursive operations.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "plan.toml");
/// ctx.validate_name("XorExample", "class")?;
///
/// // For nested validation
/// let nested = ctx.push("XorExample").push("main");
/// nested.validate_name("method", "variable")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Enclosing block names (e.g., ["XorExample", "main"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a block name and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "method in 'XorExample'" or just "class" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a `key = "value"` pair in the source.
    pub fn find_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), key, value)
    }

    /// Like [`find_span`](Self::find_span), but for the last occurrence.
    pub fn find_last_span(&self, key: &str, value: &str) -> Option<SourceSpan> {
        find_last_value_span(self.source.src(), key, value)
    }

    /// Validate that a name is a valid Java identifier.
    ///
    /// `key` is the field the name was read from, used to locate it.
    pub fn validate_name(&self, key: &str, name: &str, kind: &str) -> Result<()> {
        if is_java_keyword(name) {
            return Err(self.source.reserved_keyword_error(
                name,
                self.context_for(kind),
                self.find_span(key, name),
            ));
        }

        if let Some(reason) = identifier_error(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(key, name),
            ));
        }

        Ok(())
    }
}

/// Find the span of a string value in TOML or JSON source.
///
/// Matches `key = "value"`, `key = 'value'` and `"key": "value"`, with or
/// without spaces around the separator. The span covers the value only.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    value_starts(src, key, value, |src, pattern| src.find(pattern))
        .min()
        .map(|start| SourceSpan::from((start, value.len())))
}

/// Span of the last `key = "value"` pair in the source.
pub(crate) fn find_last_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    value_starts(src, key, value, |src, pattern| src.rfind(pattern))
        .max()
        .map(|start| SourceSpan::from((start, value.len())))
}

fn value_starts(
    src: &str,
    key: &str,
    value: &str,
    search: impl Fn(&str, &str) -> Option<usize>,
) -> impl Iterator<Item = usize> {
    let patterns = [
        format!("{key} = \"{value}\""),
        format!("{key}=\"{value}\""),
        format!("{key} = '{value}'"),
        format!("\"{key}\": \"{value}\""),
        format!("\"{key}\":\"{value}\""),
    ];

    patterns.into_iter().filter_map(move |pattern| {
        search(src, &pattern).map(|pos| pos + pattern.len() - value.len() - 1)
    })
}

impl NodeSpec {
    /// Validate this node and its children.
    pub fn validate(&self, ctx: &ParseContext<'_>) -> Result<()> {
        match self {
            NodeSpec::Comment { .. } => {}
            NodeSpec::Class { name, children } => {
                ctx.validate_name("name", name, "class")?;
                validate_children(&ctx.push(name), children)?;
            }
            NodeSpec::MainFunction { children } => {
                validate_children(&ctx.push("main"), children)?;
            }
            NodeSpec::StaticFunction { name, children } => {
                ctx.validate_name("name", name, "method")?;
                validate_children(&ctx.push(name), children)?;
            }
            NodeSpec::Const {
                name, type_name, ..
            } => {
                ctx.validate_name("name", name, "constant")?;
                if type_name.trim().is_empty() {
                    return Err(ctx.source_context().validation_error_at(
                        format!("constant '{name}' has an empty type"),
                        ctx.find_span("name", name),
                    ));
                }
            }
            NodeSpec::FunctionCall {
                name,
                type_name,
                var,
            } => {
                ctx.validate_name("name", name, "method")?;
                match (type_name, var) {
                    (Some(_), Some(var)) => ctx.validate_name("var", var, "variable")?,
                    (None, None) => {}
                    _ => {
                        return Err(ctx.source_context().validation_error_at(
                            format!("call to '{name}' must set both `type` and `var`, or neither"),
                            ctx.find_span("name", name),
                        ));
                    }
                }
            }
            NodeSpec::CreateNetwork {
                name,
                model,
                weights,
            } => {
                ctx.validate_name("name", name, "method")?;
                ctx.validate_name("weights", weights, "array")?;
                if let ModelSpec::Factory { factory_type, .. } = model {
                    if factory_type.trim().is_empty() {
                        return Err(ctx.source_context().validation_error_at(
                            format!("network '{name}' has an empty model type"),
                            ctx.find_span("name", name),
                        ));
                    }
                }
            }
            NodeSpec::InitArray { name, .. } => {
                ctx.validate_name("name", name, "array")?;
            }
            NodeSpec::EmbedTraining { pairs } => validate_pairs(ctx, pairs)?,
        }
        Ok(())
    }
}

fn validate_children(ctx: &ParseContext<'_>, children: &[NodeSpec]) -> Result<()> {
    for child in children {
        child.validate(ctx)?;
    }
    Ok(())
}

/// Every pair must have the input and ideal widths of the first pair.
fn validate_pairs(ctx: &ParseContext<'_>, pairs: &[PairSpec]) -> Result<()> {
    let Some(first) = pairs.first() else {
        return Ok(());
    };

    for (i, pair) in pairs.iter().enumerate().skip(1) {
        let mismatch = if pair.input.len() != first.input.len() {
            Some(("input", pair.input.len(), first.input.len()))
        } else if pair.ideal.len() != first.ideal.len() {
            Some(("ideal", pair.ideal.len(), first.ideal.len()))
        } else {
            None
        };

        if let Some((field, actual, expected)) = mismatch {
            return Err(ctx.source_context().validation_error_at(
                format!(
                    "training pair {} has {actual} {field} values, expected {expected}",
                    i + 1
                ),
                ctx.find_span("kind", "embed-training"),
            ));
        }
    }
    Ok(())
}
