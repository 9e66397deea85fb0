use mlexport_codegen::{CodegenError, FileBuilder, Indent, LanguageCodegen, Result};
use mlexport_ir::{ExportNode, ExportPlan, TrainedModel};
use tracing::{debug, trace};

use crate::{
    Call, Class, Comment, DoubleArray, JavaFileBuilder, Method, StringConst, TrainingTables,
    string_literal,
};

/// Imports needed by a network factory method, in emission order.
const NETWORK_IMPORTS: [&str; 3] = [
    "org.encog.ml.MLMethod",
    "org.encog.ml.factory.MLMethodFactory",
    "org.encog.ml.MLEncodable",
];

/// Java source generator for export plans.
///
/// The generator only holds configuration. Each call to
/// [`generate`](LanguageCodegen::generate) builds into its own
/// [`FileBuilder`], so a single generator may be shared across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Generator {
    indent: Indent,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn generate(&self, plan: &ExportPlan) -> Result<String> {
        let file = self.build(plan)?;
        debug!(imports = file.imports.len(), "rendering import block");
        Ok(file.render_java())
    }
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `indent` for each block level instead of four spaces.
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Run the emission pass without rendering.
    ///
    /// The returned builder holds the body and the imports collected while
    /// emitting it. [`generate`](LanguageCodegen::generate) is this followed
    /// by [`render_java`](JavaFileBuilder::render_java).
    pub fn build(&self, plan: &ExportPlan) -> Result<FileBuilder> {
        debug!(nodes = plan.node_count(), indent = %self.indent, "generating java source");

        let mut file = FileBuilder::new(self.indent);
        for node in plan.nodes() {
            emit_node(&mut file, node)?;
        }

        debug_assert_eq!(file.code.current_indent(), 0, "unbalanced blocks");
        Ok(file)
    }
}

fn emit_node(file: &mut FileBuilder, node: &ExportNode) -> Result<()> {
    trace!(kind = %node.kind(), name = node.name().unwrap_or_default(), "emit");

    match node {
        ExportNode::Comment { text } => {
            file.code.emit(&Comment(text.as_str()));
        }
        ExportNode::Class { name, children } => {
            file.code.push_blank();
            emit_block(file, &Class::new(name).header(), children)?;
        }
        ExportNode::MainFunction { children } => {
            file.code.push_blank();
            emit_block(file, &Method::main().header(), children)?;
        }
        ExportNode::StaticFunction { name, children } => {
            file.code.push_blank();
            emit_block(file, &Method::new(name.as_str()).header(), children)?;
        }
        ExportNode::FunctionCall { name, binding } => {
            file.code
                .push_blank()
                .emit(&Call::new(name).bind(binding.as_ref()));
        }
        ExportNode::Const {
            name,
            value,
            type_name,
        } => {
            file.code.emit(&StringConst::new(type_name, name, value));
        }
        ExportNode::InitArray { name, values } => {
            file.code.emit(&DoubleArray::new(name, values));
        }
        ExportNode::EmbedTraining { dataset } => {
            let pairs: Vec<_> = dataset.pairs().collect();
            file.code.emit(&TrainingTables::new(&pairs));
        }
        ExportNode::CreateNetwork {
            name,
            model,
            weights,
        } => {
            emit_network(file, name, model.as_ref(), weights)?;
        }
    }

    Ok(())
}

/// Emit `header`, the children one level deeper, then the closing brace.
fn emit_block(file: &mut FileBuilder, header: &str, children: &[ExportNode]) -> Result<()> {
    file.code.indent_line(header);
    for child in children {
        emit_node(file, child)?;
    }
    file.code.dedent_line("}");
    Ok(())
}

fn emit_network(
    file: &mut FileBuilder,
    name: &str,
    model: &dyn TrainedModel,
    weights: &str,
) -> Result<()> {
    let factory = model
        .as_factory()
        .ok_or_else(|| CodegenError::Unsupported {
            type_name: model.type_name().to_string(),
        })?;

    for import in NETWORK_IMPORTS {
        file.add_import(import);
    }

    let method = Method::new(name)
        .returns("MLMethod")
        .statement("MLMethodFactory methodFactory = new MLMethodFactory();")
        .statement(format!(
            "MLMethod result = methodFactory.create({},{}, 0, 0);",
            string_literal(factory.factory_type()),
            string_literal(factory.factory_architecture()),
        ))
        .statement(format!("((MLEncodable)result).decodeFromArray({weights});"))
        .statement("return result;");

    file.code.push_blank().emit(&method);
    Ok(())
}
