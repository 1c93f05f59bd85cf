//! Example: Band-Table Health Scoring
//!
//! Maps latest ratio values to gauge-style sub-scores via configured
//! threshold bands, then aggregates them into a composite health score
//! with caller-supplied category weights.

use std::collections::BTreeMap;

use ratiolens::score::{BandTable, CategoryWeights, ScoreBand};

/// Gauge bands for each scored metric, as configuration data.
///
/// Directionality lives in the score assignment: the Debt-to-Equity table
/// hands the highest score to the lowest range.
fn band_tables() -> Vec<(&'static str, &'static str, BandTable)> {
    vec![
        (
            "liquidity",
            "Current Ratio",
            BandTable::new(vec![
                ScoreBand::new(0.0, 0.8, 2.0, "red"),
                ScoreBand::new(0.8, 1.0, 5.0, "orange"),
                ScoreBand::new(1.0, 1.5, 7.0, "yellow"),
                ScoreBand::new(1.5, 2.0, 9.0, "green"),
            ])
            .expect("static band table"),
        ),
        (
            "solvency",
            "Debt-to-Equity Ratio",
            BandTable::new(vec![
                ScoreBand::new(0.0, 1.0, 9.0, "green"),
                ScoreBand::new(1.0, 2.0, 6.0, "yellow"),
                ScoreBand::new(2.0, 3.0, 4.0, "orange"),
                ScoreBand::new(3.0, 5.0, 2.0, "red"),
            ])
            .expect("static band table"),
        ),
        (
            "profitability",
            "Net Profit Margin",
            BandTable::new(vec![
                ScoreBand::new(-50.0, 0.0, 2.0, "red"),
                ScoreBand::new(0.0, 5.0, 4.0, "orange"),
                ScoreBand::new(5.0, 15.0, 7.0, "yellow"),
                ScoreBand::new(15.0, 30.0, 9.0, "green"),
            ])
            .expect("static band table"),
        ),
        (
            "efficiency",
            "Asset Turnover",
            BandTable::new(vec![
                ScoreBand::new(0.0, 0.3, 2.0, "red"),
                ScoreBand::new(0.3, 0.5, 4.0, "orange"),
                ScoreBand::new(0.5, 0.7, 7.0, "yellow"),
                ScoreBand::new(0.7, 1.0, 9.0, "green"),
            ])
            .expect("static band table"),
        ),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Latest fiscal-year values per company: (Current Ratio, D/E, NPM %,
    // Asset Turnover).
    let companies =
        [("Apex Power", [0.5036, 0.92, 12.61, 0.4819]), ("GridCo", [1.1416, 1.47, 11.63, 0.3543])];

    let weights = CategoryWeights::new([
        ("liquidity", 0.25),
        ("solvency", 0.25),
        ("profitability", 0.30),
        ("efficiency", 0.20),
    ])?;

    for (company, values) in companies {
        println!("=== {company} ===");

        let mut sub_scores = BTreeMap::new();
        for ((category, metric, table), value) in band_tables().iter().zip(values) {
            let (score, label) = table.score(value);
            println!("{metric:<24} {value:>8.3}  ->  {score:>4.1} ({label})");
            sub_scores.insert((*category).to_string(), score);
        }

        let composite = weights.composite(&sub_scores)?;
        println!("{:<24} {:>19.2}\n", "COMPOSITE HEALTH SCORE", composite);
    }

    Ok(())
}
