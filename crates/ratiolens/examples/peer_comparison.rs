//! Example: Two-Company Peer Comparison
//!
//! Ranks two companies metric by metric under the standard rule table,
//! then aligns and normalizes one company's ROE drivers for a
//! cross-metric trend comparison.

use ratiolens::primitives::{FiscalPeriod, RatioSeries, Unit};
use ratiolens::score::{Contender, Ranking, RuleTable};
use ratiolens::utils::{align_leading_gaps, normalize_group};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Latest fiscal-year values. Times Interest Earned stopped being
    // reported for Apex Power, so its latest value is missing.
    let metrics: &[(&str, Option<f64>, Option<f64>)] = &[
        ("Current Ratio", Some(0.5036), Some(1.1416)),
        ("Quick Ratio", Some(0.4040), Some(4.6411)),
        ("Debt-to-Equity Ratio", Some(0.92), Some(1.47)),
        ("Times Interest Earned", None, Some(1.47)),
        ("Net Profit Margin", Some(12.61), Some(11.63)),
        ("Return on Equity", Some(17.41), Some(12.38)),
        ("Asset Turnover", Some(0.4819), Some(0.3543)),
    ];

    let rules = RuleTable::standard();

    println!("{:<24} {:>10} {:>10}   {}", "Metric", "Apex", "GridCo", "Better");
    for (metric, apex, gridco) in metrics {
        let outcome = match rules.rank(metric, *apex, *gridco)? {
            Ranking::Winner(Contender::A) => "Apex Power",
            Ranking::Winner(Contender::B) => "GridCo",
            Ranking::Tie => "tie",
            Ranking::Indeterminate => "n/a",
        };
        let fmt = |v: &Option<f64>| v.map_or("n/a".to_string(), |x| format!("{x:.3}"));
        println!("{:<24} {:>10} {:>10}   {}", metric, fmt(apex), fmt(gridco), outcome);
    }

    // Trend comparison: Asset Turnover starts a year late, so the group
    // is trimmed to a common start before normalizing each driver onto
    // [0, 1].
    let periods: Vec<FiscalPeriod> =
        ["Mar-21", "Mar-22", "Mar-23", "Mar-24", "Mar-25"].iter().map(|&p| p.into()).collect();
    let drivers = vec![
        RatioSeries::new(
            "Net Profit Margin",
            Unit::Ratio,
            vec![Some(0.1240), Some(0.1974), Some(0.1498), Some(0.1016), Some(0.1261)],
        ),
        RatioSeries::new(
            "Asset Turnover",
            Unit::Multiple,
            vec![None, Some(0.3131), Some(0.4577), Some(0.4449), Some(0.4819)],
        ),
        RatioSeries::new(
            "ROE",
            Unit::Ratio,
            vec![None, Some(0.2680), Some(0.2411), Some(0.1446), Some(0.1741)],
        ),
    ];

    let aligned = align_leading_gaps(&periods, &drivers)?;
    let normalized = normalize_group(&aligned)?;

    println!("\nNormalized ROE drivers (common window starts {})", normalized.periods[0]);
    print!("{:<20}", "Period");
    for series in &normalized.series {
        print!(" {:>20}", series.name.as_str());
    }
    println!();
    for (i, period) in normalized.periods.iter().enumerate() {
        print!("{:<20}", period.as_str());
        for series in &normalized.series {
            print!(" {:>20.3}", series.values[i]);
        }
        println!();
    }

    Ok(())
}
