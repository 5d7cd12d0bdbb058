use crate::schema::FinancialReport;
use serde::{Deserialize, Serialize};

/// Plain numeric text for export cells. Whole numbers have no fractional part.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // avoids "-0"
        return "0".to_string();
    }
    value.to_string()
}

/// Renders an amount as `{sign}{symbol}{thousands-grouped, 2 decimals}`, e.g. `-$1,250.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}{}{}.{}", sign, symbol, grouped, frac)
}

/// String-only table for presentation. Never parsed back into numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DisplayTable {
    /// Left-aligned fixed-width text, one line per row plus the header.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }

        let render_line = |cells: &[String]| {
            cells
                .iter()
                .enumerate()
                .map(|(i, c)| format!("{:<width$}", c, width = widths[i]))
                .collect::<Vec<_>>()
                .join("  ")
                .trim_end()
                .to_string()
        };

        let mut lines = vec![render_line(&self.headers)];
        lines.extend(self.rows.iter().map(|r| render_line(r)));
        lines.join("\n")
    }
}

impl FinancialReport {
    /// Text lines of the manual-entry health report.
    pub fn summary_lines(&self, symbol: &str) -> Vec<String> {
        let mut lines = vec![
            format!("Total Income: {}", format_currency(self.income, symbol)),
            format!("Total Expenses: {}", format_currency(self.expenses, symbol)),
            format!(
                "Current Savings: {} ({:.1}%)",
                format_currency(self.savings, symbol),
                self.savings_rate_pct
            ),
            self.guidance.clone(),
            format!("Needs: {}", format_currency(self.budget.needs, symbol)),
            format!("Wants: {}", format_currency(self.budget.wants, symbol)),
            format!("Savings: {}", format_currency(self.budget.savings, symbol)),
        ];

        if let Some(goal) = &self.goal {
            match goal.gap {
                None => lines.push(format!(
                    "You are on track to meet your savings goal of {} per month!",
                    format_currency(goal.goal, symbol)
                )),
                Some(gap) => lines.push(format!(
                    "You need to save an extra {} to reach your goal.",
                    format_currency(gap, symbol)
                )),
            }
        }

        lines
    }
}
