//! One-shot analysis report over the EV population CSV.
//!
//! Run with: cargo run --example ev_report -- Electric_Vehicle_Population_Data.csv

use std::env;
use std::process;

use ev_trends::dataset::{clean, load_csv};
use ev_trends::stats::{histogram, missing_counts, shares, summarize, top_n, value_counts};
use ev_trends::trend::{adoption_by_year, model_years, Centering, TrendForecaster, DEFAULT_HORIZON};
use ev_trends::Result;

fn main() {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "Electric_Vehicle_Population_Data.csv".to_string());

    if let Err(err) = run(&path) {
        eprintln!("ev_report: {err}");
        process::exit(1);
    }
}

fn run(path: &str) -> Result<()> {
    println!("=== EV Population Analysis ===\n");

    // 1. Load and clean
    let records = load_csv(path)?;
    println!("Loaded {} rows from {path}", records.len());

    for (column, missing) in missing_counts(&records) {
        if missing > 0 {
            println!("  missing {column}: {missing}");
        }
    }

    let report = clean(records);
    println!(
        "Cleaned: {} rows kept ({} incomplete, {} duplicates dropped)\n",
        report.records.len(),
        report.dropped_incomplete,
        report.dropped_duplicates
    );

    // 2. Exploratory statistics
    println!("--- Top 10 Cities ---");
    let cities = value_counts(report.records.iter().filter_map(|r| r.city.as_deref()));
    for (city, count) in top_n(&cities, 10)? {
        println!("{city:>20} {count:>8}");
    }

    println!("\n--- Top 10 Makes ---");
    let makes = value_counts(report.records.iter().filter_map(|r| r.make.as_deref()));
    for (make, count) in top_n(&makes, 10)? {
        println!("{make:>20} {count:>8}");
    }

    println!("\n--- EV Type Distribution ---");
    let types = value_counts(report.records.iter().filter_map(|r| r.ev_type.as_deref()));
    for (ev_type, count, pct) in shares(&types) {
        println!("{ev_type:>45} {count:>8} ({pct:>5.1}%)");
    }

    println!("\n--- Electric Range ---");
    let ranges: Vec<f64> = report
        .records
        .iter()
        .filter_map(|r| r.electric_range)
        .collect();
    let summary = summarize(&ranges)?;
    println!(
        "count {}  mean {:.1}  std {:.1}  min {:.0}  median {:.0}  max {:.0}",
        summary.count, summary.mean, summary.std_dev, summary.min, summary.median, summary.max
    );
    for bin in histogram(&ranges, 20)? {
        println!("  [{:>5.0}, {:>5.0})  {}", bin.lo, bin.hi, bin.count);
    }

    // 3. Adoption trend and forecast
    println!("\n--- EV Adoption by Model Year ---");
    let agg = adoption_by_year(&model_years(&report.records));
    for entry in &agg {
        println!("{:>6} {:>8}", entry.year, entry.count);
    }

    let forecaster = TrendForecaster::fit(&agg, Centering::None)?;
    let horizon = forecaster.horizon(DEFAULT_HORIZON);
    let linear = forecaster.forecast_linear(&horizon);
    let cubic = forecaster.forecast_cubic(&horizon);

    println!("\n--- Forecast ({} years) ---", DEFAULT_HORIZON);
    println!("{:>6} {:>14} {:>14}", "Year", "Linear", "Cubic");
    for ((year, lin), (_, cub)) in linear.iter().zip(cubic.iter()) {
        println!("{year:>6.0} {lin:>14.1} {cub:>14.1}");
    }

    println!("\n=== Report Complete ===");
    Ok(())
}
