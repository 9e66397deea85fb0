use miette::Diagnostic;
use thiserror::Error;

/// Result type for code generation.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Errors that abort a generation pass.
///
/// A failed pass returns no partial output.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CodegenError {
    #[error("code generation not yet supported for: {type_name}")]
    #[diagnostic(
        code(mlexport::codegen_unsupported),
        help("only models with a factory description can be rebuilt by generated code")
    )]
    Unsupported { type_name: String },
}
