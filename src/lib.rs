//! BasketMiner: A Rust CLI application for market basket analysis using the Apriori algorithm
//!
//! This library provides frequent itemset mining and association rule generation
//! over transactional data: raw transactions are one-hot encoded into a boolean
//! item matrix, mined level-by-level with support pruning, and turned into
//! antecedent => consequent rules scored by support, confidence and lift.

pub mod apriori;
pub mod cli;
pub mod data;
pub mod encoder;
pub mod error;
pub mod report;
pub mod rules;
pub mod viz;

// Re-export public items for easier access
pub use apriori::{mine_frequent_itemsets, FrequentItemset, Itemset};
pub use cli::Args;
pub use data::load_transactions;
pub use encoder::{encode, ItemMatrix};
pub use error::MiningError;
pub use rules::{generate_rules, AssociationRule};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
