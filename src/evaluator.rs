use crate::classification::{classify, guidance_for, savings_rate_pct};
use crate::error::{FinancialPlanError, Result};
use crate::schema::{BudgetSplit, FinancialInput, FinancialReport, GoalProgress, PlannerConfig};
use log::debug;

/// Evaluates one manually entered month of income and expenses.
pub struct RecordEvaluator<'a> {
    config: &'a PlannerConfig,
}

impl<'a> RecordEvaluator<'a> {
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Zero income is rejected here rather than labeled, unlike batch rows.
    /// NaN and infinite amounts are rejected as they are when parsing a batch.
    pub fn evaluate(&self, input: &FinancialInput) -> Result<FinancialReport> {
        for (field, value) in [
            ("income", input.income),
            ("expenses", input.expenses),
            ("savings_goal", input.savings_goal),
        ] {
            if !value.is_finite() {
                return Err(FinancialPlanError::InvalidAmount {
                    field: field.to_string(),
                    value,
                });
            }
        }

        if input.income == 0.0 {
            return Err(FinancialPlanError::ZeroIncome);
        }

        let savings = input.income - input.expenses;
        let savings_rate_pct = savings_rate_pct(savings, input.income).unwrap_or(0.0);

        let thresholds = &self.config.thresholds;
        let status = classify(
            savings,
            savings_rate_pct,
            thresholds,
            self.config.single_record_scheme,
        );

        let report = FinancialReport {
            income: input.income,
            expenses: input.expenses,
            savings,
            savings_rate_pct,
            budget: BudgetSplit::from_income(input.income, &self.config.budget_rule),
            status,
            guidance: guidance_for(status, thresholds),
            goal: GoalProgress::compare(savings, input.savings_goal),
        };

        debug!(
            "Evaluated record: income={} expenses={} savings={} rate={:.1}% status={}",
            report.income, report.expenses, report.savings, report.savings_rate_pct, report.status
        );

        Ok(report)
    }
}
