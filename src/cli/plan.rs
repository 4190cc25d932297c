use std::io::{BufRead, Write};

use crate::advisor::{plan_advice, PlanAdvice};
use crate::error::Result;
use crate::models::Profile;
use crate::prompt::{read_line, read_money};
use crate::settings::load_settings;

pub fn run() -> Result<()> {
    let settings = load_settings();
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut output = std::io::stdout();

    let profile = interview(&mut input, &mut output)?;
    let advice = plan_advice(&profile, &settings.currency);
    println!();
    print_advice(&advice);
    Ok(())
}

/// Ask the four savings-plan questions. Numeric answers re-prompt on parse
/// failure with the same bounded policy as the file-path prompt.
pub fn interview<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Profile> {
    writeln!(output, "A few questions to build your savings plan.")?;
    let income = read_money(input, output, "Monthly income: $")?;
    let savings_goal = read_money(input, output, "Monthly savings goal: $")?;
    let debt = read_money(input, output, "Outstanding debt (0 if none): $")?;
    let financial_goal = read_line(input, output, "Main financial goal: ")?;
    Ok(Profile {
        income,
        savings_goal,
        debt,
        financial_goal,
    })
}

pub fn print_advice(advice: &PlanAdvice) {
    for line in &advice.lines {
        println!("{}", textwrap::fill(line, 78));
    }
}
