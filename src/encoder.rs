//! One-hot transaction encoding into a boolean item matrix

use ndarray::Array2;
use std::collections::{BTreeSet, HashMap};

/// Encoded transaction data: a boolean item-presence matrix plus the item
/// enumeration that names its columns.
///
/// Rows are transactions in input order. Columns are the distinct item labels
/// across all transactions, in **sorted label order** — the enumeration is
/// therefore reproducible for a given input regardless of row order.
#[derive(Debug, Clone)]
pub struct ItemMatrix {
    /// Item-presence matrix: cell (t, i) is true iff item i appears in transaction t
    pub matrix: Array2<bool>,
    /// Column index -> item label, sorted ascending
    pub items: Vec<String>,
    /// Item label -> column index
    pub index: HashMap<String, usize>,
}

impl ItemMatrix {
    /// Number of transactions (rows).
    pub fn n_transactions(&self) -> usize {
        self.matrix.nrows()
    }

    /// Number of distinct items (columns).
    pub fn n_items(&self) -> usize {
        self.matrix.ncols()
    }

    /// Resolve column indices back to item labels.
    pub fn labels(&self, columns: &[usize]) -> Vec<&str> {
        columns.iter().map(|&i| self.items[i].as_str()).collect()
    }
}

/// Encode raw transactions into a boolean item matrix.
///
/// Blank labels (empty after trimming) are filtered out — the upstream parser
/// may hand over placeholder cells from ragged rows. Duplicate items within a
/// transaction count once. An empty input yields a zero-row, zero-column
/// matrix; downstream stages treat that as an empty result, not an error.
pub fn encode(transactions: &[Vec<String>]) -> ItemMatrix {
    // Item universe, sorted for a stable column enumeration
    let universe: BTreeSet<&str> = transactions
        .iter()
        .flatten()
        .map(|label| label.trim())
        .filter(|label| !label.is_empty())
        .collect();

    let items: Vec<String> = universe.into_iter().map(String::from).collect();
    let index: HashMap<String, usize> = items
        .iter()
        .enumerate()
        .map(|(i, label)| (label.clone(), i))
        .collect();

    let mut matrix = Array2::from_elem((transactions.len(), items.len()), false);
    for (row, transaction) in transactions.iter().enumerate() {
        for label in transaction {
            if let Some(&col) = index.get(label.trim()) {
                matrix[[row, col]] = true;
            }
        }
    }

    ItemMatrix {
        matrix,
        items,
        index,
    }
}
