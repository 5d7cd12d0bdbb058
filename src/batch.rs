use crate::classification::classify;
use crate::error::Result;
use crate::format::{format_currency, format_number, DisplayTable};
use crate::ingestion::{parse_amount, RecordTable, EXPENSES_COLUMN, INCOME_COLUMN};
use crate::schema::{FinancialStatus, PlannerConfig};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

pub const SAVINGS_COLUMN: &str = "Savings";
pub const STATUS_COLUMN: &str = "Financial_Status";
pub const DEFAULT_EXPORT_FILE_NAME: &str = "financial_analysis.csv";

/// One evaluated row: the parsed numbers plus every original cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluatedRecord {
    pub income: f64,
    pub expenses: f64,
    pub savings: f64,
    /// `None` for zero-income rows.
    pub savings_rate_pct: Option<f64>,
    pub status: FinancialStatus,
    /// Original cell text in input header order.
    pub cells: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    /// Headers of the uploaded table, without the derived columns.
    pub input_headers: Vec<String>,
    pub records: Vec<EvaluatedRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub total_records: usize,
    pub total_income: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
    pub status_counts: BTreeMap<FinancialStatus, usize>,
}

impl BatchSummary {
    pub fn count(&self, status: FinancialStatus) -> usize {
        self.status_counts.get(&status).copied().unwrap_or(0)
    }
}

pub struct BatchEvaluator<'a> {
    config: &'a PlannerConfig,
}

impl<'a> BatchEvaluator<'a> {
    pub fn new(config: &'a PlannerConfig) -> Self {
        Self { config }
    }

    /// Evaluates every row of `table`.
    ///
    /// The column check runs before any row is touched; a missing column or
    /// an unparsable amount aborts the whole batch.
    pub fn evaluate(&self, table: &RecordTable) -> Result<BatchResult> {
        let income_idx = table.require_column(INCOME_COLUMN)?;
        let expenses_idx = table.require_column(EXPENSES_COLUMN)?;

        info!("Evaluating batch of {} records", table.len());

        let records = table
            .rows
            .iter()
            .enumerate()
            .map(|(row, cells)| self.evaluate_row(row, cells, income_idx, expenses_idx))
            .collect::<Result<Vec<_>>>()?;

        let result = BatchResult {
            input_headers: table.headers.clone(),
            records,
        };

        debug!("Batch status counts: {:?}", result.summary().status_counts);

        Ok(result)
    }

    fn evaluate_row(
        &self,
        row: usize,
        cells: &[String],
        income_idx: usize,
        expenses_idx: usize,
    ) -> Result<EvaluatedRecord> {
        let cell = |idx: usize| cells.get(idx).map(String::as_str).unwrap_or("");
        let income = parse_amount(cell(income_idx), row, INCOME_COLUMN)?;
        let expenses = parse_amount(cell(expenses_idx), row, EXPENSES_COLUMN)?;

        let savings = income - expenses;
        let (rate, status) = if income == 0.0 {
            warn!("Row {} has no income; labeled NoIncomeProvided", row);
            (None, FinancialStatus::NoIncomeProvided)
        } else {
            let rate = savings / income * 100.0;
            let status = classify(
                savings,
                rate,
                &self.config.thresholds,
                self.config.batch_scheme,
            );
            (Some(rate), status)
        };

        Ok(EvaluatedRecord {
            income,
            expenses,
            savings,
            savings_rate_pct: rate,
            status,
            cells: cells.to_vec(),
        })
    }
}

impl BatchResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Header row of the export. Derived columns replace same-named input
    /// columns in place and are appended otherwise.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = self.input_headers.clone();
        for derived in [SAVINGS_COLUMN, STATUS_COLUMN] {
            if !headers.iter().any(|h| h == derived) {
                headers.push(derived.to_string());
            }
        }
        headers
    }

    fn raw_row(&self, record: &EvaluatedRecord) -> Vec<String> {
        self.assemble_row(
            record.cells.clone(),
            format_number(record.savings),
            record.status.as_str().to_string(),
        )
    }

    fn assemble_row(
        &self,
        mut cells: Vec<String>,
        savings: String,
        status: String,
    ) -> Vec<String> {
        cells.resize(self.input_headers.len(), String::new());
        for (column, value) in [(SAVINGS_COLUMN, savings), (STATUS_COLUMN, status)] {
            match self.input_headers.iter().position(|h| h == column) {
                Some(idx) => cells[idx] = value,
                None => cells.push(value),
            }
        }
        cells
    }

    /// Machine-readable rows: original cell text, numeric `Savings`, status name.
    pub fn raw_rows(&self) -> Vec<Vec<String>> {
        self.records.iter().map(|r| self.raw_row(r)).collect()
    }

    /// Writes the export as CSV with a header row and no index column.
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.headers())?;
        for record in &self.records {
            wtr.write_record(self.raw_row(record))?;
        }
        wtr.flush()?;
        Ok(())
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(buf)
    }

    /// Presentation copy with `Income`, `Expenses` and `Savings` rendered as
    /// currency text. Built from the evaluated numbers; export is unaffected.
    pub fn display_view(&self, currency_symbol: &str) -> DisplayTable {
        let rows = self
            .records
            .iter()
            .map(|record| {
                let mut cells = record.cells.clone();
                cells.resize(self.input_headers.len(), String::new());
                // Columns are looked up by name; a header that is gone is left out.
                for (column, amount) in [
                    (INCOME_COLUMN, record.income),
                    (EXPENSES_COLUMN, record.expenses),
                ] {
                    if let Some(idx) = self.input_headers.iter().position(|h| h == column) {
                        cells[idx] = format_currency(amount, currency_symbol);
                    }
                }
                self.assemble_row(
                    cells,
                    format_currency(record.savings, currency_symbol),
                    record.status.as_str().to_string(),
                )
            })
            .collect();

        DisplayTable {
            headers: self.headers(),
            rows,
        }
    }

    pub fn summary(&self) -> BatchSummary {
        let mut summary = BatchSummary {
            total_records: self.records.len(),
            ..BatchSummary::default()
        };
        for record in &self.records {
            summary.total_income += record.income;
            summary.total_expenses += record.expenses;
            summary.total_savings += record.savings;
            *summary.status_counts.entry(record.status).or_insert(0) += 1;
        }
        summary
    }
}
