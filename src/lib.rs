//! # Financial Health Planner
//!
//! A library for turning monthly income and expenses into savings metrics,
//! a 50/30/20 budget recommendation and a financial status, either for one
//! manually entered month or for every row of an uploaded CSV file.
//!
//! ## Core Concepts
//!
//! - **Single-record evaluation**: income, expenses and an optional savings goal produce a
//!   [`FinancialReport`]. Zero income is an input error.
//! - **Batch evaluation**: a CSV table with `Income` and `Expenses` columns gains `Savings` and
//!   `Financial_Status` columns. Zero-income rows are labeled `NoIncomeProvided` instead of failing.
//! - **Views**: batch results export as CSV with raw numbers, or render as a display table with
//!   currency-prefixed amounts. The currency symbol is cosmetic.
//! - **Tier schemes**: both paths share the same thresholds; the manual path uses a two-tier
//!   scheme by default and the batch path a four-tier scheme. Both are configurable.
//!
//! ## Example
//!
//! ```rust
//! use financial_health_planner::*;
//!
//! let config = PlannerConfig::default();
//!
//! let report = evaluate(&FinancialInput::new(5000.0, 3000.0), &config).unwrap();
//! assert_eq!(report.savings, 2000.0);
//! assert_eq!(report.status, FinancialStatus::HealthySavings);
//!
//! let csv = "Month,Income,Expenses\nJan,5000,3000\nFeb,0,100\n";
//! let result = evaluate_csv(csv.as_bytes(), &config).unwrap();
//! assert_eq!(result.records[1].status, FinancialStatus::NoIncomeProvided);
//!
//! let export = String::from_utf8(result.to_csv_bytes().unwrap()).unwrap();
//! assert!(export.starts_with("Month,Income,Expenses,Savings,Financial_Status"));
//! ```

pub mod batch;
pub mod classification;
pub mod error;
pub mod evaluator;
pub mod format;
pub mod ingestion;
pub mod schema;

pub use batch::{
    BatchEvaluator, BatchResult, BatchSummary, EvaluatedRecord, DEFAULT_EXPORT_FILE_NAME,
    SAVINGS_COLUMN, STATUS_COLUMN,
};
pub use classification::{classify, guidance_for, savings_rate_pct};
pub use error::{FinancialPlanError, Result};
pub use evaluator::RecordEvaluator;
pub use format::{format_currency, format_number, DisplayTable};
pub use ingestion::{RecordTable, EXPENSES_COLUMN, INCOME_COLUMN};
pub use schema::*;

use log::debug;
use std::io::Read;
use std::path::Path;

pub struct FinancialPlanner;

impl FinancialPlanner {
    pub fn evaluate(input: &FinancialInput, config: &PlannerConfig) -> Result<FinancialReport> {
        config.validate()?;
        RecordEvaluator::new(config).evaluate(input)
    }

    pub fn evaluate_batch(table: &RecordTable, config: &PlannerConfig) -> Result<BatchResult> {
        config.validate()?;
        debug!(
            "Batch columns: {:?} (scheme {:?})",
            table.headers, config.batch_scheme
        );
        BatchEvaluator::new(config).evaluate(table)
    }

    pub fn evaluate_csv<R: Read>(reader: R, config: &PlannerConfig) -> Result<BatchResult> {
        let table = RecordTable::from_reader(reader)?;
        Self::evaluate_batch(&table, config)
    }

    pub fn evaluate_csv_path<P: AsRef<Path>>(path: P, config: &PlannerConfig) -> Result<BatchResult> {
        let table = RecordTable::from_path(path)?;
        Self::evaluate_batch(&table, config)
    }
}

pub fn evaluate(input: &FinancialInput, config: &PlannerConfig) -> Result<FinancialReport> {
    FinancialPlanner::evaluate(input, config)
}

pub fn evaluate_batch(table: &RecordTable, config: &PlannerConfig) -> Result<BatchResult> {
    FinancialPlanner::evaluate_batch(table, config)
}

pub fn evaluate_csv<R: Read>(reader: R, config: &PlannerConfig) -> Result<BatchResult> {
    FinancialPlanner::evaluate_csv(reader, config)
}
