//! BasketMiner: Market basket analysis CLI using the Apriori algorithm
//!
//! This is the main entrypoint that orchestrates transaction loading, one-hot
//! encoding, frequent itemset mining, rule generation and reporting.

use anyhow::Result;
use basketminer::{encode, generate_rules, load_transactions, mine_frequent_itemsets, viz, Args};
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.verbose {
        println!("BasketMiner - Apriori Frequent Itemsets & Association Rules");
        println!("===========================================================\n");
    }

    run_pipeline(&args)
}

/// Run the full mining pipeline
fn run_pipeline(args: &Args) -> Result<()> {
    println!("=== Apriori Mining Pipeline ===\n");

    let start_time = Instant::now();

    // Step 1: Load transactions
    if args.verbose {
        println!("Step 1: Loading transactions");
        println!("  Input file: {}", args.input);
    }

    let load_start = Instant::now();
    let transactions = load_transactions(&args.input)?;
    let load_time = load_start.elapsed();

    println!("✓ Transactions loaded: {}", transactions.len());
    if args.verbose {
        println!("  Loading time: {:.2}s", load_time.as_secs_f64());
    }

    // Step 2: Encode into the boolean item matrix
    if args.verbose {
        println!("\nStep 2: Encoding transactions");
    }

    let encoded = encode(&transactions);
    println!("✓ Encoded: {} distinct items", encoded.n_items());
    if args.verbose {
        println!("  Matrix shape: {:?}", encoded.matrix.shape());
    }

    // Step 3: Mine frequent itemsets
    if args.verbose {
        println!("\nStep 3: Mining frequent itemsets");
        println!("  Minimum support: {}", args.min_support);
    }

    let mine_start = Instant::now();
    let frequent = mine_frequent_itemsets(&encoded, args.min_support)?;
    let mine_time = mine_start.elapsed();

    println!("✓ Frequent itemsets found: {}", frequent.len());
    if args.verbose {
        println!("  Mining time: {:.2}s", mine_time.as_secs_f64());
        let max_size = frequent.iter().map(|f| f.items.len()).max().unwrap_or(0);
        println!("  Largest itemset size: {max_size}");
    }

    // Step 4: Generate association rules
    if args.verbose {
        println!("\nStep 4: Generating association rules");
        println!("  Minimum confidence: {}", args.min_confidence);
    }

    let rules_start = Instant::now();
    let rules = generate_rules(&frequent, args.min_confidence)?;
    let rules_time = rules_start.elapsed();

    println!("✓ Rules generated: {}", rules.len());
    if args.verbose {
        println!("  Rule generation time: {:.2}s", rules_time.as_secs_f64());
    }

    // Step 5: Report tables and charts
    viz::generate_report(&frequent, &rules, &encoded, &args.output, args.top)?;

    let total_time = start_time.elapsed();
    println!("\n=== Pipeline Complete ===");
    println!("Total processing time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
