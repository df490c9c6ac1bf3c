//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Market basket analysis CLI: Apriori frequent itemsets and association rules
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input transaction file (.csv or .tsv, no header, one transaction per row)
    #[arg(short, long, default_value = "transactions.csv")]
    pub input: String,

    /// Minimum support threshold, in (0, 1]
    #[arg(short = 's', long, default_value = "0.02")]
    pub min_support: f64,

    /// Minimum confidence threshold, in (0, 1]
    #[arg(short = 'c', long, default_value = "0.5")]
    pub min_confidence: f64,

    /// Output path for the confidence/lift scatter plot
    #[arg(short, long, default_value = "rules_plot.png")]
    pub output: String,

    /// Maximum number of rows to print per table
    #[arg(short, long, default_value = "1000")]
    pub top: usize,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
