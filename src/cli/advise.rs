use std::path::Path;

use colored::Colorize;

use crate::advisor::{spending_suggestions, SpendLevel};
use crate::error::Result;
use crate::loader;
use crate::summary::{summarize, SpendingSummary};

pub fn run(file: &str) -> Result<()> {
    let mut rows = loader::load_transactions(Path::new(file))?;
    loader::ensure_categorized(&mut rows);
    let summary = summarize(&rows);
    print_suggestions(&summary);
    Ok(())
}

pub fn print_suggestions(summary: &SpendingSummary) {
    let suggestions = spending_suggestions(summary);
    if suggestions.is_empty() {
        println!("No spending data to analyze.");
        return;
    }
    println!("Budget Suggestions");
    for s in &suggestions {
        let wrapped = textwrap::fill(&s.message, 78);
        match s.level {
            SpendLevel::High => println!("{}", wrapped.yellow()),
            SpendLevel::Low => println!("{}", wrapped.green()),
            SpendLevel::Moderate => println!("{wrapped}"),
        }
    }
}
