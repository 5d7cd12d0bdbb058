use financial_health_planner::{
    FinancialPlanner, FinancialStatus, PlannerConfig, RecordTable, DEFAULT_EXPORT_FILE_NAME,
};

const UPLOAD: &str = "\
Month,Income,Expenses,Notes
2024-01,5200,3100,bonus
2024-02,4800,4500,car repair
2024-03,0,900,between jobs
2024-04,4100,4400,holiday
2024-05,4300,3700,
";

fn main() -> anyhow::Result<()> {
    let config = PlannerConfig::default().with_currency("€");

    let table = RecordTable::from_reader(UPLOAD.as_bytes())?;
    println!("Uploaded Data");
    println!("{}", table_preview(&table));
    println!();

    let result = FinancialPlanner::evaluate_batch(&table, &config)?;
    println!("Analysis Results");
    println!("{}", result.display_view(&config.currency_symbol).render());
    println!();

    let summary = result.summary();
    println!("Status breakdown");
    for status in FinancialStatus::ALL {
        let count = summary.count(status);
        println!("  {:<20} {}", status.label(), "#".repeat(count));
    }

    let out = std::env::temp_dir().join(DEFAULT_EXPORT_FILE_NAME);
    std::fs::write(&out, result.to_csv_bytes()?)?;
    println!();
    println!("Export written to {}", out.display());

    Ok(())
}

fn table_preview(table: &RecordTable) -> String {
    let head = table.head(5);
    let mut lines = vec![head.headers.join(" | ")];
    lines.extend(head.rows.iter().map(|r| r.join(" | ")));
    lines.join("\n")
}
