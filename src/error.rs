//! Error types for the mining core

use thiserror::Error;

/// Errors reported by the pure mining core.
///
/// The surrounding binary wraps these in `anyhow` for user-facing messages;
/// library callers get the typed variants directly.
#[derive(Debug, Error)]
pub enum MiningError {
    /// A threshold parameter is outside its valid range (0, 1].
    #[error("{name} must be in (0, 1], got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A frequent itemset handed to the rule generator violates its own
    /// contract: a claimed support that is not positive, or a subset that is
    /// missing from the frequent set (downward-closure violation). Indicates
    /// an integration error upstream, not a property of the data.
    #[error("inconsistent frequent itemset {itemset:?}: {detail}")]
    InconsistentItemset { itemset: Vec<usize>, detail: String },
}
