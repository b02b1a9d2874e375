//! Gene order: the row/column labels of the weight matrix.

use serde::{Deserialize, Serialize};
use crate::{Error, Result};

/// Ordered gene identifiers. Position `i` labels row `i` and column `i`
/// of the matching [`WeightMatrix`](super::WeightMatrix).
///
/// Uniqueness is not checked; duplicate symbols simply produce duplicate
/// (source, target) pairs downstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct GeneOrder {
    genes: Vec<String>,
}

impl GeneOrder {
    /// Build a gene order. An empty list is an input-shape error.
    pub fn new(genes: impl IntoIterator<Item = impl Into<String>>) -> Result<Self> {
        let genes: Vec<String> = genes.into_iter().map(Into::into).collect();
        if genes.is_empty() {
            return Err(Error::EmptyInput("gene order contains no genes".into()));
        }
        Ok(Self { genes })
    }

    /// Number of genes (G).
    pub fn len(&self) -> usize {
        self.genes.len()
    }

    /// Whether the order holds no genes. `new` rejects empty input, so this is false.
    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.genes.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.genes.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.genes
    }
}

impl std::ops::Index<usize> for GeneOrder {
    type Output = str;

    fn index(&self, index: usize) -> &str {
        &self.genes[index]
    }
}

impl TryFrom<Vec<String>> for GeneOrder {
    type Error = Error;

    fn try_from(genes: Vec<String>) -> Result<Self> {
        Self::new(genes)
    }
}

impl From<GeneOrder> for Vec<String> {
    fn from(order: GeneOrder) -> Self {
        order.genes
    }
}
