use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinancialPlanError {
    #[error("Please enter your income to continue.")]
    ZeroIncome,

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid number in row {row}, column '{column}': '{value}'")]
    InvalidNumber {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Invalid amount for {field}: {value}")]
    InvalidAmount { field: String, value: f64 },

    #[error("Row {row} has {found} cells but the header has {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FinancialPlanError {
    /// True for problems the person entering the data can fix themselves.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            FinancialPlanError::ZeroIncome
                | FinancialPlanError::MissingColumn(_)
                | FinancialPlanError::InvalidNumber { .. }
                | FinancialPlanError::InvalidAmount { .. }
                | FinancialPlanError::RowLength { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FinancialPlanError>;
