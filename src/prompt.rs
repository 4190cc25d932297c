use std::io::{BufRead, Write};

use crate::error::{Result, TallyError};

/// How many chances interactive prompts give before giving up. Shared by the
/// file-path prompt and the numeric interview questions so the retry policy
/// is uniform across the program.
pub const MAX_ATTEMPTS: usize = 3;

/// Print a label (no trailing newline) and read one trimmed line.
pub fn read_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Err(TallyError::Input("unexpected end of input".to_string()));
    }
    Ok(buf.trim().to_string())
}

/// Prompt for a dollar amount until it parses, up to MAX_ATTEMPTS.
/// Tolerates a currency symbol and thousands separators ("$1,200" parses).
pub fn read_money<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<f64> {
    for attempt in 1..=MAX_ATTEMPTS {
        let line = read_line(input, output, label)?;
        match line.replace(['$', ','], "").trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                if attempt < MAX_ATTEMPTS {
                    writeln!(output, "That doesn't look like a number. Try again.")?;
                }
            }
        }
    }
    Err(TallyError::Input(format!(
        "no valid number after {MAX_ATTEMPTS} attempts"
    )))
}
