//! Training data embedded in export plans.

use std::fmt;

/// Name of the generated table holding every input vector.
pub const INPUT_TABLE: &str = "INPUT_DATA";

/// Name of the generated table holding every ideal vector.
pub const IDEAL_TABLE: &str = "IDEAL_DATA";

/// One (input, ideal) pair borrowed from a dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPair<'a> {
    input: &'a [f64],
    ideal: &'a [f64],
}

impl<'a> DataPair<'a> {
    pub fn new(input: &'a [f64], ideal: &'a [f64]) -> Self {
        Self { input, ideal }
    }

    pub fn input(&self) -> &'a [f64] {
        self.input
    }

    pub fn ideal(&self) -> &'a [f64] {
        self.ideal
    }
}

/// An ordered collection of training pairs.
pub trait TrainingData: fmt::Debug + Send + Sync {
    /// Iterate pairs in dataset order.
    fn pairs(&self) -> Box<dyn Iterator<Item = DataPair<'_>> + '_>;

    /// Number of pairs.
    fn len(&self) -> usize {
        self.pairs().count()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An owned training pair.
#[derive(Debug, Clone, PartialEq)]
pub struct BasicPair {
    pub input: Vec<f64>,
    pub ideal: Vec<f64>,
}

impl BasicPair {
    pub fn new(input: Vec<f64>, ideal: Vec<f64>) -> Self {
        Self { input, ideal }
    }
}

/// In-memory dataset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BasicDataset {
    pairs: Vec<BasicPair>,
}

impl BasicDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pair.
    pub fn push(&mut self, input: Vec<f64>, ideal: Vec<f64>) {
        self.pairs.push(BasicPair::new(input, ideal));
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_pair(mut self, input: Vec<f64>, ideal: Vec<f64>) -> Self {
        self.push(input, ideal);
        self
    }
}

impl From<Vec<BasicPair>> for BasicDataset {
    fn from(pairs: Vec<BasicPair>) -> Self {
        Self { pairs }
    }
}

impl TrainingData for BasicDataset {
    fn pairs(&self) -> Box<dyn Iterator<Item = DataPair<'_>> + '_> {
        Box::new(
            self.pairs
                .iter()
                .map(|p| DataPair::new(&p.input, &p.ideal)),
        )
    }

    fn len(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor() -> BasicDataset {
        BasicDataset::new()
            .with_pair(vec![0.0, 0.0], vec![0.0])
            .with_pair(vec![1.0, 0.0], vec![1.0])
            .with_pair(vec![0.0, 1.0], vec![1.0])
            .with_pair(vec![1.0, 1.0], vec![0.0])
    }

    #[test]
    fn test_pairs_in_order() {
        let data = xor();
        let inputs: Vec<&[f64]> = data.pairs().map(|p| p.input()).collect();
        assert_eq!(inputs[1], &[1.0, 0.0]);
        assert_eq!(inputs[3], &[1.0, 1.0]);
        assert_eq!(data.len(), 4);
        assert!(!data.is_empty());
    }
}
