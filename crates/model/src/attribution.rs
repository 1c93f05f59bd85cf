//! Sequential (waterfall) ROE attribution.
//!
//! Decomposes one period's ROE into ordered additive contributions, one
//! per DuPont factor. Introducing the factors one at a time and recording
//! the marginal change makes the steps sum to the total by construction,
//! which is what a waterfall chart draws.

use ratiolens_primitives::{Company, CompanyProfile, FiscalPeriod};

use crate::{DuPontIdentity, ModelError};

/// One ordered step of an attribution: a label and its additive
/// contribution in percentage points of ROE.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributionStep {
    /// Step label ("Net Profit Margin", "Asset Turnover effect", ...).
    pub label: String,
    /// Additive contribution in percentage points.
    pub value: f64,
}

/// Attribution of one period's ROE for one company.
#[derive(Debug, Clone, PartialEq)]
pub struct RoeAttribution {
    /// Company the attribution belongs to.
    pub company: Company,
    /// Period being decomposed.
    pub period: FiscalPeriod,
    /// Identity name ("3-factor" or "5-factor").
    pub identity: &'static str,
    /// Ordered steps; the last step is always the total (absolute ROE).
    pub steps: Vec<AttributionStep>,
}

impl RoeAttribution {
    /// The total: absolute ROE for the period, in percentage points.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.steps.last().map_or(0.0, |s| s.value)
    }

    /// The factor steps, excluding the trailing total.
    #[must_use]
    pub fn contributions(&self) -> &[AttributionStep] {
        &self.steps[..self.steps.len().saturating_sub(1)]
    }

    /// Sum of the factor contributions; equals [`total`](Self::total) up
    /// to floating-point association.
    #[must_use]
    pub fn explained_total(&self) -> f64 {
        self.contributions().iter().map(|s| s.value).sum()
    }

    /// Print a concise summary of the attribution.
    pub fn print_summary(&self) {
        println!(
            "\n================================================================================"
        );
        println!("ROE DECOMPOSITION: {} ({}, {} identity)", self.company, self.period, self.identity);
        println!(
            "================================================================================"
        );
        println!("{:<32} {:>14}", "Step", "Contribution");
        println!("{:-<32} {:-^14}", "", "");
        for step in self.contributions() {
            println!("{:<32} {:>+13.2}%", step.label, step.value);
        }
        println!("{:-<32} {:-^14}", "", "");
        println!("{:<32} {:>+13.2}%", "TOTAL", self.total());
        println!(
            "================================================================================\n"
        );
    }
}

/// Compute the ordered waterfall steps for one period's factor values.
///
/// With cumulative products `c_i = f_1 x ... x f_i`:
/// step 1 is `c_1` (the base, in ROE units), step `i` is `c_i - c_(i-1)`
/// (the marginal effect of introducing factor `i`), and the final step is
/// the total `c_n`, which equals ROE by identity. All values are scaled
/// to percentage points.
///
/// This attribution is order dependent: attributing the same factors in a
/// different order gives different marginal values. The canonical DuPont
/// order (margin, then efficiency, then leverage) is fixed policy here,
/// not a mathematically unique answer.
///
/// # Errors
/// Returns `ModelError::FactorCountMismatch` if `factors` does not match
/// the identity's arity.
pub fn sequential_attribution(
    identity: &DuPontIdentity,
    factors: &[f64],
) -> Result<Vec<AttributionStep>, ModelError> {
    if factors.len() != identity.n_factors() {
        return Err(ModelError::FactorCountMismatch {
            identity: identity.name,
            expected: identity.n_factors(),
            actual: factors.len(),
        });
    }

    let mut steps = Vec::with_capacity(factors.len() + 1);
    let mut running = 1.0;
    let mut previous = 0.0;
    for (i, (name, factor)) in identity.factor_names().iter().zip(factors).enumerate() {
        running *= factor;
        let cumulative = running * 100.0;
        let label = if i == 0 { (*name).to_string() } else { format!("{name} effect") };
        steps.push(AttributionStep { label, value: cumulative - previous });
        previous = cumulative;
    }
    steps.push(AttributionStep { label: "Return on Equity".to_string(), value: previous });

    Ok(steps)
}

/// Decompose one period's ROE from a company profile.
///
/// Reads each factor series from the identity's category and attributes
/// via [`sequential_attribution`]. A factor that is missing at the
/// requested period (or whose series is absent entirely) fails with
/// `ModelError::IncompleteFactors` naming every missing factor; callers
/// wanting a fallback period can retry with
/// [`RatioSeries::latest_known`](ratiolens_primitives::RatioSeries::latest_known).
///
/// # Errors
/// `ModelError::UnknownPeriod` for a label outside the canonical list,
/// `ModelError::IncompleteFactors` as above.
pub fn decompose(
    profile: &CompanyProfile,
    identity: &DuPontIdentity,
    period: &FiscalPeriod,
) -> Result<RoeAttribution, ModelError> {
    let index = profile
        .period_index(period)
        .ok_or_else(|| ModelError::UnknownPeriod(period.to_string()))?;

    let mut factors = Vec::with_capacity(identity.n_factors());
    let mut missing = Vec::new();
    for name in identity.factor_names() {
        match profile.series(identity.category(), name).and_then(|s| s.value_at(index)) {
            Some(value) => factors.push(value),
            None => missing.push((*name).to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(ModelError::IncompleteFactors { period: period.to_string(), missing });
    }

    Ok(RoeAttribution {
        company: profile.company.clone(),
        period: period.clone(),
        identity: identity.name,
        steps: sequential_attribution(identity, &factors)?,
    })
}
