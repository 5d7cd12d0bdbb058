use financial_health_planner::{evaluate, FinancialInput, FinancialPlanError, PlannerConfig};

fn main() {
    let config = PlannerConfig::default();

    let entries = [
        FinancialInput::new(5000.0, 3000.0),
        FinancialInput::new(3000.0, 2000.0).with_goal(1500.0),
        FinancialInput::new(2000.0, 2200.0),
        FinancialInput::new(0.0, 400.0),
    ];

    for input in &entries {
        println!("Financial Health Report");
        match evaluate(input, &config) {
            Ok(report) => {
                for line in report.summary_lines(&config.currency_symbol) {
                    println!("  {}", line);
                }
            }
            Err(e @ FinancialPlanError::ZeroIncome) => println!("  {}", e),
            Err(e) => eprintln!("  evaluation failed: {}", e),
        }
        println!();
    }
}
