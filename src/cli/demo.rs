use std::path::Path;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::Result;
use crate::loader;
use crate::settings::load_settings;
use crate::summary::summarize;

struct DemoTxn {
    day: u32,
    description: &'static str,
    amount: f64,
}

/// One month of sample activity: two paychecks plus spending that touches
/// every category.
const SAMPLE: &[DemoTxn] = &[
    DemoTxn { day: 1, description: "PAYCHECK DIRECT DEPOSIT", amount: 2450.00 },
    DemoTxn { day: 2, description: "STARBUCKS COFFEE #1123", amount: -6.45 },
    DemoTxn { day: 3, description: "RENT PAYMENT", amount: -1250.00 },
    DemoTxn { day: 4, description: "UBER TRIP HELP.UBER.COM", amount: -18.30 },
    DemoTxn { day: 5, description: "NETFLIX.COM", amount: -15.49 },
    DemoTxn { day: 6, description: "CITY WATER UTILITY", amount: -64.10 },
    DemoTxn { day: 7, description: "AMAZON MARKETPLACE", amount: -82.97 },
    DemoTxn { day: 9, description: "TRADER JOES GROCERY", amount: -104.22 },
    DemoTxn { day: 10, description: "SHELL GAS 0441", amount: -48.60 },
    DemoTxn { day: 13, description: "SPOTIFY USA", amount: -11.99 },
    DemoTxn { day: 15, description: "CHECK 204", amount: -120.00 },
    DemoTxn { day: 16, description: "PAYCHECK DIRECT DEPOSIT", amount: 2450.00 },
    DemoTxn { day: 18, description: "LOCAL PIZZA CO", amount: -28.75 },
    DemoTxn { day: 20, description: "TARGET STORE T-0824", amount: -66.13 },
    DemoTxn { day: 23, description: "VERIZON WIRELESS PHONE", amount: -75.00 },
    DemoTxn { day: 26, description: "AMC CINEMA 0087", amount: -32.50 },
];

/// Clamp a day to the last valid day of the given year/month.
fn clamp_day(year: i32, month: u32, day: u32) -> u32 {
    let next_month = NaiveDate::from_ymd_opt(year, month + 1, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap());
    let last_day = next_month.pred_opt().unwrap().day();
    day.min(last_day)
}

fn make_date(year: i32, month: u32, day: u32) -> String {
    let d = clamp_day(year, month, day);
    format!("{year:04}-{month:02}-{d:02}")
}

fn write_sample(path: &Path) -> Result<()> {
    let today = Local::now().date_naive();
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["Date", "Description", "Amount"])?;
    for txn in SAMPLE {
        wtr.write_record([
            make_date(today.year(), today.month(), txn.day),
            txn.description.to_string(),
            format!("{:.2}", txn.amount),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn run() -> Result<()> {
    let dir = std::env::temp_dir().join("tally-demo");
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("sample.csv");
    write_sample(&path)?;

    println!("Sample statement written to {}", path.display());
    println!();

    let settings = load_settings();
    let mut rows = loader::load_transactions(&path)?;
    let assigned = loader::ensure_categorized(&mut rows);
    println!("Loaded {} transactions, categorized {assigned}.", rows.len());
    println!();
    let summary = summarize(&rows);
    println!("{}", super::summary::render_summary(&summary, &settings.currency));
    println!();
    super::advise::print_suggestions(&summary);
    println!();
    println!("Try these next:");
    println!("  tally summary {}", path.display());
    #[cfg(feature = "chart")]
    println!("  tally chart {}", path.display());
    println!("  tally plan");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::{classify, Category};

    #[test]
    fn test_clamp_day_handles_short_months() {
        assert_eq!(clamp_day(2025, 2, 31), 28);
        assert_eq!(clamp_day(2024, 2, 31), 29);
        assert_eq!(clamp_day(2025, 12, 31), 31);
        assert_eq!(clamp_day(2025, 4, 31), 30);
    }

    #[test]
    fn test_sample_touches_every_category() {
        let mut seen: Vec<Category> = SAMPLE
            .iter()
            .map(|t| classify(t.description))
            .collect();
        seen.dedup();
        for category in Category::ALL {
            assert!(
                seen.contains(&category),
                "sample data never hits {}",
                category.name()
            );
        }
    }

    #[test]
    fn test_write_sample_is_loadable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.csv");
        write_sample(&path).unwrap();
        let mut rows = loader::load_transactions(&path).unwrap();
        assert_eq!(rows.len(), SAMPLE.len());
        assert_eq!(loader::ensure_categorized(&mut rows), SAMPLE.len());
        assert!(rows.iter().all(|r| r.date.is_some()));
    }
}
