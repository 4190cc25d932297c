use std::path::Path;

use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::fmt::money;
use crate::loader;
use crate::settings::load_settings;
use crate::summary::{summarize, SpendingSummary};

pub fn run(file: &str) -> Result<()> {
    let settings = load_settings();
    let mut rows = loader::load_transactions(Path::new(file))?;
    loader::ensure_categorized(&mut rows);
    let summary = summarize(&rows);
    println!("{}", render_summary(&summary, &settings.currency));
    Ok(())
}

/// Format the per-category table. Amounts keep their sign and are colored by
/// it; color is dropped automatically when stdout is not a terminal.
pub fn render_summary(summary: &SpendingSummary, currency: &str) -> String {
    if summary.totals.is_empty() {
        return "No transactions found.".to_string();
    }
    let mut table = Table::new();
    table.set_header(vec!["Category", "Amount", "Count"]);
    for item in &summary.totals {
        let amt = if item.total < 0.0 {
            money(item.total, currency).red().to_string()
        } else {
            money(item.total, currency).green().to_string()
        };
        table.add_row(vec![
            Cell::new(item.category.name()),
            Cell::new(amt),
            Cell::new(item.count),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total".bold()),
        Cell::new(money(summary.total, currency)),
        Cell::new(""),
    ]);
    format!("Spending by Category\n{table}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::Category;
    use crate::summary::CategoryTotal;

    #[test]
    fn test_render_summary_lists_categories_and_total() {
        let summary = SpendingSummary {
            totals: vec![
                CategoryTotal {
                    category: Category::Food,
                    total: -50.0,
                    count: 2,
                },
                CategoryTotal {
                    category: Category::Bills,
                    total: -1250.0,
                    count: 1,
                },
            ],
            total: -1300.0,
        };
        let out = render_summary(&summary, "$");
        assert!(out.contains("Spending by Category"));
        assert!(out.contains("Food"));
        assert!(out.contains("-$1,250.00"));
        assert!(out.contains("-$1,300.00"));
    }

    #[test]
    fn test_render_summary_empty() {
        let summary = SpendingSummary {
            totals: vec![],
            total: 0.0,
        };
        assert_eq!(render_summary(&summary, "$"), "No transactions found.");
    }
}
