//! Prints frequency tables and goodness-of-fit p-values for a survey CSV
//!
//! Usage: survey_report <file.csv> [column ...]
//!
//! With no columns given, every column in the dataset is analyzed.

use survey_polars::{read_survey_csv, AnalysisReport, ColumnSet};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let path = args
        .next()
        .ok_or_else(|| anyhow::anyhow!("usage: survey_report <file.csv> [column ...]"))?;

    let df = read_survey_csv(&path)?;
    let requested: Vec<String> = args.collect();
    let columns = if requested.is_empty() {
        df.get_column_names()
            .iter()
            .map(|name| name.to_string())
            .collect::<ColumnSet>()
    } else {
        ColumnSet::new(requested)
    };

    let report = AnalysisReport::build(&df, &columns)?;
    for column in report.columns() {
        let analysis = report.get(column).expect("reported column");
        println!("=== {} ===", report.label(column).expect("reported column"));
        println!("{}", analysis.p_value());
        for row in analysis.table().rows() {
            println!(
                "  {:<40} {:>6} {:>7.2}%",
                row.category, row.frequency, row.percent
            );
        }
        println!();
    }

    Ok(())
}
