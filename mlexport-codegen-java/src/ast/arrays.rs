//! `double[]` and `double[][]` initializers.

use mlexport_codegen::{CodeFragment, Renderable, join_numbers};
use mlexport_ir::{DataPair, IDEAL_TABLE, INPUT_TABLE};

/// Values per line in a `double[]` initializer.
pub const VALUES_PER_LINE: usize = 10;

/// A `public static final double[]` constant.
///
/// Values are wrapped [`VALUES_PER_LINE`] to a line. Every value except the
/// last is followed by a comma.
#[derive(Debug, Clone)]
pub struct DoubleArray<'a> {
    name: &'a str,
    values: &'a [f64],
}

impl<'a> DoubleArray<'a> {
    pub fn new(name: &'a str, values: &'a [f64]) -> Self {
        Self { name, values }
    }
}

impl Renderable for DoubleArray<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let chunks = self.values.chunks(VALUES_PER_LINE);
        let last = chunks.len().saturating_sub(1);
        let rows = chunks
            .enumerate()
            .map(|(i, chunk)| {
                let mut row = join_numbers(chunk);
                if i < last {
                    row.push(',');
                }
                CodeFragment::line(row)
            })
            .collect();

        vec![CodeFragment::block(
            format!("public static final double[] {} = {{", self.name),
            rows,
            "};",
        )]
    }
}

/// A `public static final double[][]` constant with one row per line.
///
/// Each row is written as `{ a,b,c },`, including the last.
#[derive(Debug, Clone)]
pub struct DoubleTable<'a> {
    name: &'a str,
    rows: Vec<&'a [f64]>,
}

impl<'a> DoubleTable<'a> {
    pub fn new(name: &'a str, rows: impl IntoIterator<Item = &'a [f64]>) -> Self {
        Self {
            name,
            rows: rows.into_iter().collect(),
        }
    }
}

impl Renderable for DoubleTable<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let rows = self
            .rows
            .iter()
            .map(|row| CodeFragment::line(format!("{{ {} }},", join_numbers(row))))
            .collect();

        vec![CodeFragment::block(
            format!("public static final double[][] {} = {{", self.name),
            rows,
            "};",
        )]
    }
}

/// The `INPUT_DATA` and `IDEAL_DATA` tables of a training set, separated by
/// a blank line.
#[derive(Debug, Clone)]
pub struct TrainingTables<'a> {
    input: DoubleTable<'a>,
    ideal: DoubleTable<'a>,
}

impl<'a> TrainingTables<'a> {
    pub fn new(pairs: &[DataPair<'a>]) -> Self {
        Self {
            input: DoubleTable::new(INPUT_TABLE, pairs.iter().map(|p| p.input())),
            ideal: DoubleTable::new(IDEAL_TABLE, pairs.iter().map(|p| p.ideal())),
        }
    }
}

impl Renderable for TrainingTables<'_> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let mut fragments = self.input.to_fragments();
        fragments.push(CodeFragment::blank());
        fragments.extend(self.ideal.to_fragments());
        fragments
    }
}
