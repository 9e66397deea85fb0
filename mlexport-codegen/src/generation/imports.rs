//! Import collection utilities.

use indexmap::IndexSet;

/// Tracks fully qualified imports and deduplicates them.
///
/// Maintains first-seen order for deterministic output.
///
/// # Example
///
/// ```
/// use mlexport_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// imports.add("org.encog.ml.MLMethod");
/// imports.add("org.encog.ml.factory.MLMethodFactory");
/// imports.add("org.encog.ml.MLMethod");
///
/// let names: Vec<&str> = imports.iter().collect();
/// assert_eq!(
///     names,
///     ["org.encog.ml.MLMethod", "org.encog.ml.factory.MLMethodFactory"]
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    imports: IndexSet<String>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an import. Returns false if it was already recorded.
    pub fn add(&mut self, name: &str) -> bool {
        if self.imports.contains(name) {
            return false;
        }
        self.imports.insert(name.to_string())
    }

    /// Check if a name is already imported.
    pub fn contains(&self, name: &str) -> bool {
        self.imports.contains(name)
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.imports.iter().map(String::as_str)
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.imports.is_empty()
    }

    /// Get the number of imports.
    pub fn len(&self) -> usize {
        self.imports.len()
    }
}
