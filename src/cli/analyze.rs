use std::io::{BufRead, Write};
use std::path::Path;

use rand::seq::SliceRandom;

use crate::error::{Result, TallyError};
use crate::loader;
use crate::models::Transaction;
use crate::prompt;
use crate::settings::load_settings;
use crate::summary::summarize;

const GREETINGS: &[&str] = &[
    "Let's see where the money went.",
    "Another statement, another story.",
    "Time to tally up.",
    "The numbers are ready when you are.",
    "Right, let's open the books.",
];

fn greet(user_name: &str) {
    let mut rng = rand::thread_rng();
    let greeting = GREETINGS.choose(&mut rng).unwrap_or(&"Hello.");
    let first = user_name.split_whitespace().next().unwrap_or("");
    if first.is_empty() {
        println!("{greeting}");
    } else {
        println!("Hello, {first}. {greeting}");
    }
    println!();
}

/// The full sequential pass: load, categorize, summarize, suggest, chart,
/// then the savings-plan interview.
pub fn run(file: Option<&str>, no_chart: bool, no_plan: bool) -> Result<()> {
    let settings = load_settings();
    greet(&settings.user_name);

    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let mut rows = load_with_reprompt(&mut input, &mut output, file)?;
    let assigned = loader::ensure_categorized(&mut rows);
    if assigned > 0 {
        println!("Categorized {assigned} of {} transactions.", rows.len());
        println!();
    }

    let summary = summarize(&rows);
    println!("{}", super::summary::render_summary(&summary, &settings.currency));
    println!();
    super::advise::print_suggestions(&summary);

    #[cfg(feature = "chart")]
    if !no_chart {
        crate::chart::show_pie_chart(&summary, &settings.currency)?;
    }
    #[cfg(not(feature = "chart"))]
    let _ = no_chart;

    if !no_plan {
        println!();
        let profile = super::plan::interview(&mut input, &mut output)?;
        let advice = crate::advisor::plan_advice(&profile, &settings.currency);
        println!();
        super::plan::print_advice(&advice);
    }

    Ok(())
}

/// Resolve a loadable statement, re-prompting on file-not-found up to
/// `prompt::MAX_ATTEMPTS` times before giving up. Other load errors (missing
/// column, malformed file) are not retried.
fn load_with_reprompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    file: Option<&str>,
) -> Result<Vec<Transaction>> {
    let mut path = match file {
        Some(p) => p.to_string(),
        None => prompt::read_line(input, output, "Path to CSV statement: ")?,
    };
    let mut attempts = 0usize;
    loop {
        match loader::load_transactions(Path::new(&path)) {
            Err(TallyError::FileNotFound(p)) if attempts < prompt::MAX_ATTEMPTS => {
                attempts += 1;
                writeln!(output, "Could not find {p}.")?;
                path = prompt::read_line(input, output, "Path to CSV statement: ")?;
            }
            Err(TallyError::FileNotFound(p)) => {
                return Err(TallyError::Input(format!(
                    "gave up after {attempts} retries; last path tried: {p}"
                )));
            }
            other => return other,
        }
    }
}
