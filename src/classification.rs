use crate::schema::{FinancialStatus, StatusThresholds, TierScheme};

/// Savings as a percentage of income, or `None` when there is no positive income to divide by.
pub fn savings_rate_pct(savings: f64, income: f64) -> Option<f64> {
    if income > 0.0 {
        Some(savings / income * 100.0)
    } else {
        None
    }
}

/// Classifies a record with a computable savings rate.
///
/// Rules are checked in priority order: negative savings, then the low
/// threshold, then (four-tier only) the healthy threshold.
pub fn classify(
    savings: f64,
    rate_pct: f64,
    thresholds: &StatusThresholds,
    scheme: TierScheme,
) -> FinancialStatus {
    if savings < 0.0 {
        return FinancialStatus::Overspending;
    }
    if rate_pct < thresholds.low_savings_below_pct {
        return FinancialStatus::LowSavings;
    }
    match scheme {
        TierScheme::TwoTier => FinancialStatus::HealthySavings,
        TierScheme::FourTier if rate_pct >= thresholds.healthy_savings_from_pct => {
            FinancialStatus::HealthySavings
        }
        TierScheme::FourTier => FinancialStatus::ModerateSavings,
    }
}

/// Guidance shown next to a status. The healthy threshold is quoted as the target.
pub fn guidance_for(status: FinancialStatus, thresholds: &StatusThresholds) -> String {
    match status {
        FinancialStatus::NoIncomeProvided => "Please enter your income to continue.".to_string(),
        FinancialStatus::Overspending => {
            "You are overspending. Try reducing expenses.".to_string()
        }
        FinancialStatus::LowSavings => format!(
            "Savings rate is very low. Aim for at least {}%.",
            thresholds.healthy_savings_from_pct
        ),
        FinancialStatus::ModerateSavings => format!(
            "Decent savings rate. Aim for at least {}%.",
            thresholds.healthy_savings_from_pct
        ),
        FinancialStatus::HealthySavings => "Good savings rate! Keep it up.".to_string(),
    }
}
