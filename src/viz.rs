//! Visualization functions using Plotters for mining results

use crate::apriori::FrequentItemset;
use crate::encoder::ItemMatrix;
use crate::report;
use crate::rules::AssociationRule;
use plotters::prelude::*;

/// How many itemsets the support bar chart shows
const BAR_CHART_LIMIT: usize = 20;

/// Create a scatter plot of rules: confidence (x) vs lift (y), with the
/// circle radius scaled by the rule's support.
pub fn create_rule_scatter(rules: &[AssociationRule], output_path: &str) -> crate::Result<()> {
    let conf_min = rules.iter().map(|r| r.confidence).fold(f64::INFINITY, f64::min) - 0.05;
    let conf_max = rules
        .iter()
        .map(|r| r.confidence)
        .fold(f64::NEG_INFINITY, f64::max)
        + 0.05;
    let lift_min = rules.iter().map(|r| r.lift).fold(f64::INFINITY, f64::min) - 0.1;
    let lift_max = rules.iter().map(|r| r.lift).fold(f64::NEG_INFINITY, f64::max) + 0.1;

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Association Rules: Confidence vs Lift", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(conf_min..conf_max, lift_min..lift_max)?;

    chart
        .configure_mesh()
        .x_desc("Confidence")
        .y_desc("Lift")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for rule in rules {
        // Radius tracks support so stronger rules stand out
        let radius = (rule.support * 40.0).round().max(3.0) as i32;
        chart.draw_series(std::iter::once(Circle::new(
            (rule.confidence, rule.lift),
            radius,
            BLUE.mix(0.5).filled(),
        )))?;
    }

    root.present()?;
    println!("Rule scatter plot saved to: {output_path}");

    Ok(())
}

/// Create a bar chart of the top itemsets by support.
pub fn create_support_bar_chart(
    frequent: &[FrequentItemset],
    output_path: &str,
) -> crate::Result<()> {
    let mut sorted: Vec<&FrequentItemset> = frequent.iter().collect();
    sorted.sort_by(|a, b| {
        b.support
            .partial_cmp(&a.support)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted.truncate(BAR_CHART_LIMIT);

    let max_support = sorted.first().map_or(1.0, |f| f.support);

    let root = BitMapBackend::new(output_path, (600, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Top Itemsets by Support", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..(sorted.len().max(1) as f64), 0f64..(max_support * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Itemset rank (by support)")
        .y_desc("Support")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    for (rank, f) in sorted.iter().enumerate() {
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (rank as f64 + 0.1, 0.0),
                (rank as f64 + 0.9, f.support),
            ],
            GREEN.filled(),
        )))?;
    }

    root.present()?;
    println!("Support bar chart saved to: {output_path}");

    Ok(())
}

/// Generate the full report: console tables plus both charts.
///
/// With no rules the scatter is skipped with a notice; with no frequent
/// itemsets the bar chart is skipped too. Neither case is an error.
pub fn generate_report(
    frequent: &[FrequentItemset],
    rules: &[AssociationRule],
    encoded: &ItemMatrix,
    base_output_path: &str,
    top: usize,
) -> crate::Result<()> {
    report::print_frequent_itemsets(frequent, encoded, top);
    report::print_rules(rules, encoded, top);

    if frequent.is_empty() {
        println!("\nNo frequent itemsets; skipping charts.");
        return Ok(());
    }

    let bar_chart_path = base_output_path.replace(".png", "_support.png");
    create_support_bar_chart(frequent, &bar_chart_path)?;

    if rules.is_empty() {
        println!("No rules meet the current thresholds; skipping scatter plot.");
    } else {
        create_rule_scatter(rules, base_output_path)?;
    }

    Ok(())
}
