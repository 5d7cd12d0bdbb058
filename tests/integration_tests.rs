use financial_health_planner::*;
use std::fs::File;
use std::io::Write;

fn health_rank(status: FinancialStatus) -> u8 {
    match status {
        FinancialStatus::Overspending => 0,
        FinancialStatus::LowSavings => 1,
        FinancialStatus::ModerateSavings => 2,
        FinancialStatus::HealthySavings => 3,
        FinancialStatus::NoIncomeProvided => panic!("no-income status in monotonicity check"),
    }
}

fn four_tier_config() -> PlannerConfig {
    PlannerConfig {
        single_record_scheme: TierScheme::FourTier,
        ..PlannerConfig::default()
    }
}

#[test]
fn test_documented_examples() {
    let config = PlannerConfig::default();

    let report = evaluate(&FinancialInput::new(5000.0, 3000.0), &config).unwrap();
    assert_eq!(report.savings, 2000.0);
    assert!((report.savings_rate_pct - 40.0).abs() < 1e-9);
    assert_eq!(report.status, FinancialStatus::HealthySavings);
    assert_eq!(report.budget.needs, 2500.0);
    assert_eq!(report.budget.wants, 1500.0);
    assert_eq!(report.budget.savings, 1000.0);

    let report = evaluate(&FinancialInput::new(2000.0, 2200.0), &config).unwrap();
    assert_eq!(report.savings, -200.0);
    assert_eq!(report.status, FinancialStatus::Overspending);

    let report = evaluate(&FinancialInput::new(1000.0, 950.0), &config).unwrap();
    assert!((report.savings_rate_pct - 5.0).abs() < 1e-9);
    assert_eq!(report.status, FinancialStatus::LowSavings);

    let result = evaluate_csv("Income,Expenses\n0,100\n".as_bytes(), &config).unwrap();
    assert_eq!(result.records[0].savings, -100.0);
    assert_eq!(result.raw_rows()[0][3], "NoIncomeProvided");

    let report = evaluate(
        &FinancialInput::new(3000.0, 2000.0).with_goal(1500.0),
        &config,
    )
    .unwrap();
    assert_eq!(report.savings, 1000.0);
    assert_eq!(report.goal_met(), Some(false));
    assert_eq!(report.goal_gap(), Some(500.0));
}

#[test]
fn test_savings_identity_and_budget_sum() {
    let config = PlannerConfig::default();

    for income in [1.0, 250.0, 999.99, 3333.33, 5000.0, 123_456.78] {
        for expenses in [0.0, 0.5, 100.0, 2999.0, 10_000.0] {
            let report = evaluate(&FinancialInput::new(income, expenses), &config).unwrap();
            assert_eq!(report.savings, income - expenses);
            assert!(
                (report.budget.total() - income).abs() < 1e-6,
                "split for {} sums to {}",
                income,
                report.budget.total()
            );
        }
    }
}

#[test]
fn test_zero_income_asymmetry() {
    let config = PlannerConfig::default();

    let err = evaluate(&FinancialInput::new(0.0, 100.0).with_goal(50.0), &config).unwrap_err();
    assert!(matches!(err, FinancialPlanError::ZeroIncome));

    let result = evaluate_csv("Income,Expenses\n0,100\n1000,100\n".as_bytes(), &config).unwrap();
    assert_eq!(result.len(), 2);
    assert_eq!(result.records[0].status, FinancialStatus::NoIncomeProvided);
    assert_eq!(result.records[1].status, FinancialStatus::HealthySavings);
}

#[test]
fn test_status_monotonic_in_income() {
    let expenses = 1000.0;

    for config in [PlannerConfig::default(), four_tier_config()] {
        let mut previous = 0;
        let mut income = 500.0;
        while income <= 5000.0 {
            let report = evaluate(&FinancialInput::new(income, expenses), &config).unwrap();
            let rank = health_rank(report.status);
            assert!(
                rank >= previous,
                "status got worse at income {}: {:?}",
                income,
                report.status
            );
            previous = rank;
            income += 10.0;
        }
    }

    let rows: Vec<Vec<String>> = (50..=500)
        .map(|i| vec![format!("{}", i * 10), "1000".to_string()])
        .collect();
    let table = RecordTable::from_rows(["Income", "Expenses"], rows).unwrap();
    let result = evaluate_batch(&table, &PlannerConfig::default()).unwrap();
    let ranks: Vec<u8> = result.records.iter().map(|r| health_rank(r.status)).collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(ranks.first(), Some(&0));
    assert_eq!(ranks.last(), Some(&3));
}

#[test]
fn test_missing_expenses_fails_before_any_rows() {
    let config = PlannerConfig::default();
    // The second row would fail to parse if rows were touched.
    let csv = "Income,Spending\n1000,200\nnot-a-number,1\n";
    let err = evaluate_csv(csv.as_bytes(), &config).unwrap_err();
    match err {
        FinancialPlanError::MissingColumn(column) => assert_eq!(column, "Expenses"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_missing_income_fails_before_any_rows() {
    let config = PlannerConfig::default();
    let csv = "Salary,Expenses\n1000,200\n2000,abc\n";
    let err = evaluate_csv(csv.as_bytes(), &config).unwrap_err();
    match err {
        FinancialPlanError::MissingColumn(column) => assert_eq!(column, "Income"),
        other => panic!("expected MissingColumn, got {:?}", other),
    }
}

#[test]
fn test_non_finite_manual_entry_matches_batch_rejection() {
    let config = PlannerConfig::default();

    let err = evaluate(&FinancialInput::new(f64::NAN, 100.0), &config).unwrap_err();
    assert!(matches!(err, FinancialPlanError::InvalidAmount { .. }));

    let err = evaluate_csv("Income,Expenses\nNaN,100\n".as_bytes(), &config).unwrap_err();
    assert!(matches!(err, FinancialPlanError::InvalidNumber { .. }));
}

#[test]
fn test_row_order_and_passthrough_preserved() {
    let config = PlannerConfig::default();
    let csv = "\
Name,Income,City,Expenses
Zoe,4000,\"Oslo, NO\",3900
Adam,2500,Lima,1000
Mia,0,Kyiv,50
Bo,1800,Rome,1700
";
    let result = evaluate_csv(csv.as_bytes(), &config).unwrap();

    let names: Vec<&str> = result.records.iter().map(|r| r.cells[0].as_str()).collect();
    assert_eq!(names, vec!["Zoe", "Adam", "Mia", "Bo"]);

    let exported = result.to_csv_bytes().unwrap();
    let mut reader = csv::Reader::from_reader(exported.as_slice());
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(
        headers,
        vec!["Name", "Income", "City", "Expenses", "Savings", "Financial_Status"]
    );

    let rows: Vec<Vec<String>> = reader
        .records()
        .map(|r| r.unwrap().iter().map(String::from).collect())
        .collect();
    assert_eq!(
        rows,
        vec![
            vec!["Zoe", "4000", "Oslo, NO", "3900", "100", "LowSavings"],
            vec!["Adam", "2500", "Lima", "1000", "1500", "HealthySavings"],
            vec!["Mia", "0", "Kyiv", "50", "-50", "NoIncomeProvided"],
            vec!["Bo", "1800", "Rome", "1700", "100", "LowSavings"],
        ]
    );
}

#[test]
fn test_display_view_does_not_change_export() {
    let config = PlannerConfig::default().with_currency("₹");
    let result = evaluate_csv("Income,Expenses\n1200,1000\n".as_bytes(), &config).unwrap();

    let before = result.to_csv_bytes().unwrap();
    let display = result.display_view(&config.currency_symbol);
    let after = result.to_csv_bytes().unwrap();

    assert_eq!(before, after);
    assert_eq!(
        display.rows[0],
        vec!["₹1,200.00", "₹1,000.00", "₹200.00", "ModerateSavings"]
    );
    assert_eq!(
        String::from_utf8(after).unwrap(),
        "Income,Expenses,Savings,Financial_Status\n1200,1000,200,ModerateSavings\n"
    );
}

#[test]
fn test_empty_batch_exports_header_only() {
    let config = PlannerConfig::default();
    let result = evaluate_csv("Income,Expenses\n".as_bytes(), &config).unwrap();
    assert!(result.is_empty());
    assert_eq!(result.summary().total_records, 0);
    assert_eq!(
        String::from_utf8(result.to_csv_bytes().unwrap()).unwrap(),
        "Income,Expenses,Savings,Financial_Status\n"
    );
}

#[test]
fn test_csv_file_round_trip_with_json_config() -> anyhow::Result<()> {
    let dir = std::env::temp_dir().join(format!("fhp-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;

    let config_path = dir.join("planner.json");
    let mut file = File::create(&config_path)?;
    writeln!(
        file,
        r#"{{"currency_symbol": "£", "batch_scheme": "TwoTier", "thresholds": {{"low_savings_below_pct": 5.0, "healthy_savings_from_pct": 25.0}}}}"#
    )?;
    let config = PlannerConfig::from_path(&config_path)?;

    let input_path = dir.join("upload.csv");
    std::fs::write(&input_path, "Income,Expenses\n1000,930\n1000,960\n")?;

    let result = FinancialPlanner::evaluate_csv_path(&input_path, &config)?;
    let statuses: Vec<FinancialStatus> = result.records.iter().map(|r| r.status).collect();
    // 7% clears the custom 5% threshold; two-tier has no moderate band.
    assert_eq!(
        statuses,
        vec![FinancialStatus::HealthySavings, FinancialStatus::LowSavings]
    );

    let output_path = dir.join(DEFAULT_EXPORT_FILE_NAME);
    result.write_csv(File::create(&output_path)?)?;
    let exported = std::fs::read_to_string(&output_path)?;
    assert!(exported.starts_with("Income,Expenses,Savings,Financial_Status\n"));
    assert!(exported.contains("1000,930,70,HealthySavings"));

    std::fs::remove_dir_all(&dir)?;
    Ok(())
}

#[test]
fn test_summary_feeds_chart_data() {
    let config = PlannerConfig::default();
    let csv = "Income,Expenses\n5000,3000\n1000,850\n1000,950\n2000,2200\n0,10\n";
    let summary = evaluate_csv(csv.as_bytes(), &config).unwrap().summary();

    assert_eq!(summary.total_records, 5);
    for status in FinancialStatus::ALL {
        assert_eq!(summary.count(status), 1, "{:?}", status);
    }
    assert!((summary.total_income - 9000.0).abs() < 1e-9);
    assert!((summary.total_expenses - 7010.0).abs() < 1e-9);

    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["status_counts"]["NoIncomeProvided"], 1);
}
