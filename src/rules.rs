//! Association rule generation from frequent itemsets

use crate::apriori::{FrequentItemset, Itemset};
use crate::error::MiningError;
use std::collections::HashMap;

/// Association rule: antecedent => consequent
#[derive(Debug, Clone, PartialEq)]
pub struct AssociationRule {
    /// Items on the left side of the rule
    pub antecedent: Itemset,
    /// Items on the right side of the rule
    pub consequent: Itemset,
    /// Support of antecedent ∪ consequent
    pub support: f64,
    /// support(antecedent ∪ consequent) / support(antecedent)
    pub confidence: f64,
    /// confidence / support(consequent)
    pub lift: f64,
}

/// Derive all rules with confidence >= `min_confidence` from the frequent itemsets.
///
/// Every frequent itemset of size >= 2 is split into each of its non-empty
/// proper subsets (antecedent) against the complement (consequent). Antecedent
/// and consequent supports are looked up in the frequent set itself: downward
/// closure guarantees every subset of a frequent itemset is present, so no
/// rescan of the transaction data is needed. Inputs that break that guarantee,
/// or carry a non-positive support, are rejected as inconsistent rather than
/// risking a division by zero.
///
/// Output order is unspecified; callers sort for presentation.
pub fn generate_rules(
    frequent: &[FrequentItemset],
    min_confidence: f64,
) -> Result<Vec<AssociationRule>, MiningError> {
    if !(min_confidence > 0.0 && min_confidence <= 1.0) {
        return Err(MiningError::InvalidParameter {
            name: "min_confidence",
            value: min_confidence,
        });
    }

    let mut support_of: HashMap<&Itemset, f64> = HashMap::with_capacity(frequent.len());
    for f in frequent {
        if !(f.support > 0.0 && f.support <= 1.0) {
            return Err(MiningError::InconsistentItemset {
                itemset: f.items.items().to_vec(),
                detail: format!("claimed support {} is outside (0, 1]", f.support),
            });
        }
        support_of.insert(&f.items, f.support);
    }

    let mut rules = Vec::new();
    for f in frequent {
        let items = f.items.items();
        let k = items.len();
        if k < 2 {
            continue;
        }

        // Every non-empty proper subset as antecedent, complement as consequent
        for mask in 1usize..((1usize << k) - 1) {
            let mut antecedent_items = Vec::new();
            let mut consequent_items = Vec::new();
            for (bit, &item) in items.iter().enumerate() {
                if mask & (1 << bit) != 0 {
                    antecedent_items.push(item);
                } else {
                    consequent_items.push(item);
                }
            }
            let antecedent = Itemset::new(antecedent_items);
            let consequent = Itemset::new(consequent_items);

            let antecedent_support = lookup(&support_of, &antecedent, &f.items)?;
            let confidence = f.support / antecedent_support;
            if confidence < min_confidence {
                continue;
            }

            let consequent_support = lookup(&support_of, &consequent, &f.items)?;
            rules.push(AssociationRule {
                antecedent,
                consequent,
                support: f.support,
                confidence,
                lift: confidence / consequent_support,
            });
        }
    }

    Ok(rules)
}

/// Support of a subset of `source`, which downward closure requires to be frequent.
fn lookup(
    support_of: &HashMap<&Itemset, f64>,
    subset: &Itemset,
    source: &Itemset,
) -> Result<f64, MiningError> {
    support_of
        .get(subset)
        .copied()
        .ok_or_else(|| MiningError::InconsistentItemset {
            itemset: source.items().to_vec(),
            detail: format!(
                "subset {:?} is not in the frequent set (downward-closure violation)",
                subset.items()
            ),
        })
}
