//! Console tables for frequent itemsets and association rules

use crate::apriori::{FrequentItemset, Itemset};
use crate::encoder::ItemMatrix;
use crate::rules::AssociationRule;

fn format_itemset(itemset: &Itemset, encoded: &ItemMatrix) -> String {
    encoded.labels(itemset.items()).join(", ")
}

/// Print frequent itemsets sorted by support descending, capped at `top` rows.
pub fn print_frequent_itemsets(frequent: &[FrequentItemset], encoded: &ItemMatrix, top: usize) {
    println!("\n=== Frequent Itemsets ===");
    if frequent.is_empty() {
        println!("(none at this support threshold)");
        return;
    }

    let mut sorted: Vec<&FrequentItemset> = frequent.iter().collect();
    sorted.sort_by(|a, b| {
        b.support
            .partial_cmp(&a.support)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.items.cmp(&b.items))
    });

    println!("{:>8} | itemset", "support");
    println!("---------|--------");
    for f in sorted.iter().take(top) {
        println!("{:>8.4} | {}", f.support, format_itemset(&f.items, encoded));
    }
    if sorted.len() > top {
        println!("... {} more not shown", sorted.len() - top);
    }
}

/// Print rules sorted by confidence descending, capped at `top` rows.
pub fn print_rules(rules: &[AssociationRule], encoded: &ItemMatrix, top: usize) {
    println!("\n=== Association Rules ===");
    if rules.is_empty() {
        println!("(no rules meet the current thresholds)");
        return;
    }

    let mut sorted: Vec<&AssociationRule> = rules.iter().collect();
    sorted.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.antecedent.cmp(&b.antecedent))
    });

    println!(
        "{:>8} | {:>10} | {:>8} | rule",
        "support", "confidence", "lift"
    );
    println!("---------|------------|----------|-----");
    for rule in sorted.iter().take(top) {
        println!(
            "{:>8.4} | {:>10.4} | {:>8.4} | {} => {}",
            rule.support,
            rule.confidence,
            rule.lift,
            format_itemset(&rule.antecedent, encoded),
            format_itemset(&rule.consequent, encoded),
        );
    }
    if sorted.len() > top {
        println!("... {} more not shown", sorted.len() - top);
    }
}
