use crate::error::{FinancialPlanError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Financial health classification of a single record.
///
/// Variants are ordered from least to most healthy, so `a < b` means `a` is
/// the worse position. `NoIncomeProvided` sorts first because no rate can be
/// computed for it.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, JsonSchema,
)]
#[serde(rename_all = "PascalCase")]
pub enum FinancialStatus {
    #[schemars(description = "Income is zero, so no savings rate can be computed (batch rows only)")]
    NoIncomeProvided,

    #[schemars(description = "Expenses exceed income")]
    Overspending,

    #[schemars(description = "Savings rate below the low-savings threshold (10% by default)")]
    LowSavings,

    #[schemars(
        description = "Savings rate between the low-savings and healthy thresholds (four-tier scheme only)"
    )]
    ModerateSavings,

    #[schemars(description = "Savings rate at or above the healthy threshold")]
    HealthySavings,
}

impl FinancialStatus {
    pub const ALL: [FinancialStatus; 5] = [
        FinancialStatus::NoIncomeProvided,
        FinancialStatus::Overspending,
        FinancialStatus::LowSavings,
        FinancialStatus::ModerateSavings,
        FinancialStatus::HealthySavings,
    ];

    /// The value written to the `Financial_Status` export column.
    pub fn as_str(&self) -> &'static str {
        match self {
            FinancialStatus::NoIncomeProvided => "NoIncomeProvided",
            FinancialStatus::Overspending => "Overspending",
            FinancialStatus::LowSavings => "LowSavings",
            FinancialStatus::ModerateSavings => "ModerateSavings",
            FinancialStatus::HealthySavings => "HealthySavings",
        }
    }

    /// Human readable label for display tables.
    pub fn label(&self) -> &'static str {
        match self {
            FinancialStatus::NoIncomeProvided => "No Income Provided",
            FinancialStatus::Overspending => "Overspending",
            FinancialStatus::LowSavings => "Low Savings",
            FinancialStatus::ModerateSavings => "Moderate Savings",
            FinancialStatus::HealthySavings => "Healthy Savings",
        }
    }
}

impl std::fmt::Display for FinancialStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "PascalCase")]
pub enum TierScheme {
    #[schemars(
        description = "Overspending, LowSavings, HealthySavings. Any non-negative savings at or above the low threshold counts as healthy."
    )]
    TwoTier,

    #[schemars(
        description = "Overspending, LowSavings, ModerateSavings, HealthySavings. Healthy requires the rate to reach the healthy threshold."
    )]
    FourTier,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct StatusThresholds {
    #[schemars(description = "Savings rates (percent) strictly below this are LowSavings")]
    pub low_savings_below_pct: f64,

    #[schemars(
        description = "Savings rates (percent) at or above this are HealthySavings under the four-tier scheme"
    )]
    pub healthy_savings_from_pct: f64,
}

impl Default for StatusThresholds {
    fn default() -> Self {
        Self {
            low_savings_below_pct: 10.0,
            healthy_savings_from_pct: 20.0,
        }
    }
}

/// Fractions of income recommended for needs, wants and savings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct BudgetRule {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl Default for BudgetRule {
    fn default() -> Self {
        Self {
            needs: 0.5,
            wants: 0.3,
            savings: 0.2,
        }
    }
}

/// Explicit settings for both evaluators, replacing ambient UI state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct PlannerConfig {
    #[schemars(
        description = "Symbol prefixed to amounts in display output. Cosmetic only, no conversion is applied."
    )]
    pub currency_symbol: String,

    #[schemars(description = "Rate thresholds shared by both evaluators")]
    pub thresholds: StatusThresholds,

    #[schemars(description = "Tier scheme for manual single-record evaluation")]
    pub single_record_scheme: TierScheme,

    #[schemars(description = "Tier scheme for batch (CSV) evaluation")]
    pub batch_scheme: TierScheme,

    #[schemars(description = "Budget split applied to income; fractions must sum to 1.0")]
    pub budget_rule: BudgetRule,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "$".to_string(),
            thresholds: StatusThresholds::default(),
            single_record_scheme: TierScheme::TwoTier,
            batch_scheme: TierScheme::FourTier,
            budget_rule: BudgetRule::default(),
        }
    }
}

const BUDGET_RULE_TOLERANCE: f64 = 1e-9;

impl PlannerConfig {
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        self.currency_symbol = symbol.into();
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: PlannerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let t = &self.thresholds;
        if !t.low_savings_below_pct.is_finite() || !t.healthy_savings_from_pct.is_finite() {
            return Err(FinancialPlanError::InvalidConfig(
                "thresholds must be finite numbers".to_string(),
            ));
        }
        if t.low_savings_below_pct > t.healthy_savings_from_pct {
            return Err(FinancialPlanError::InvalidConfig(format!(
                "low savings threshold {} is above healthy threshold {}",
                t.low_savings_below_pct, t.healthy_savings_from_pct
            )));
        }

        let rule = &self.budget_rule;
        if [rule.needs, rule.wants, rule.savings]
            .iter()
            .any(|f| !f.is_finite() || *f < 0.0)
        {
            return Err(FinancialPlanError::InvalidConfig(
                "budget fractions must be non-negative".to_string(),
            ));
        }
        let total = rule.needs + rule.wants + rule.savings;
        if (total - 1.0).abs() > BUDGET_RULE_TOLERANCE {
            return Err(FinancialPlanError::InvalidConfig(format!(
                "budget fractions sum to {}, expected 1.0",
                total
            )));
        }

        Ok(())
    }

    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(PlannerConfig)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        let schema = Self::generate_json_schema();
        serde_json::to_string_pretty(&schema)
    }
}

/// Manual entry for one month.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FinancialInput {
    pub income: f64,
    pub expenses: f64,
    #[serde(default)]
    pub savings_goal: f64,
}

impl FinancialInput {
    pub fn new(income: f64, expenses: f64) -> Self {
        Self {
            income,
            expenses,
            savings_goal: 0.0,
        }
    }

    pub fn with_goal(mut self, savings_goal: f64) -> Self {
        self.savings_goal = savings_goal;
        self
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct BudgetSplit {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl BudgetSplit {
    pub fn from_income(income: f64, rule: &BudgetRule) -> Self {
        Self {
            needs: income * rule.needs,
            wants: income * rule.wants,
            savings: income * rule.savings,
        }
    }

    pub fn total(&self) -> f64 {
        self.needs + self.wants + self.savings
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct GoalProgress {
    pub goal: f64,
    pub met: bool,
    /// Extra monthly savings still needed. Only present (and positive) when the goal is missed.
    pub gap: Option<f64>,
}

impl GoalProgress {
    pub fn compare(savings: f64, goal: f64) -> Option<Self> {
        if goal <= 0.0 {
            return None;
        }
        let met = savings >= goal;
        Some(Self {
            goal,
            met,
            gap: if met { None } else { Some(goal - savings) },
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct FinancialReport {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    pub savings_rate_pct: f64,
    pub budget: BudgetSplit,
    pub status: FinancialStatus,
    pub guidance: String,
    /// `None` when no savings goal was entered.
    pub goal: Option<GoalProgress>,
}

impl FinancialReport {
    pub fn goal_met(&self) -> Option<bool> {
        self.goal.map(|g| g.met)
    }

    pub fn goal_gap(&self) -> Option<f64> {
        self.goal.and_then(|g| g.gap)
    }
}
