use std::path::Path;

use crate::classifier::{classify, Category};
use crate::error::{Result, TallyError};
use crate::models::Transaction;

// ---------------------------------------------------------------------------
// Cell parsers
// ---------------------------------------------------------------------------

/// Parse an amount cell, tolerating currency symbols, thousands separators,
/// stray quotes, and parenthesized negatives. Unparseable cells become 0.0.
pub fn parse_amount(raw: &str) -> f64 {
    let s = raw.replace(',', "").replace('"', "").replace('$', "");
    let s = s.trim();
    if let Some(inner) = s.strip_prefix('(').and_then(|v| v.strip_suffix(')')) {
        return -inner.trim().parse::<f64>().unwrap_or(0.0);
    }
    s.parse().unwrap_or(0.0)
}

/// Normalize a date cell to ISO. Accepts YYYY-MM-DD or M/D/YYYY; anything
/// else is dropped rather than failing the row, since dates are
/// presentation-only here.
pub fn parse_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d.format("%Y-%m-%d").to_string());
    }
    let parts: Vec<&str> = raw.split('/').collect();
    if parts.len() != 3 {
        return None;
    }
    let m: u32 = parts[0].parse().ok()?;
    let d: u32 = parts[1].parse().ok()?;
    let y: i32 = parts[2].parse().ok()?;
    chrono::NaiveDate::from_ymd_opt(y, m, d).map(|dt| dt.format("%Y-%m-%d").to_string())
}

// ---------------------------------------------------------------------------
// Column mapping
// ---------------------------------------------------------------------------

struct ColumnMap {
    description: usize,
    amount: Option<usize>,
    date: Option<usize>,
    category: Option<usize>,
}

/// Resolve column indexes from the header row. Header names are matched
/// lower-cased and trimmed; columns beyond the known four are ignored.
fn map_columns(headers: &csv::StringRecord) -> Result<ColumnMap> {
    let mut description = None;
    let mut amount = None;
    let mut date = None;
    let mut category = None;
    for (i, field) in headers.iter().enumerate() {
        match field.trim().to_lowercase().as_str() {
            "description" => description = Some(i),
            "amount" => amount = Some(i),
            "date" => date = Some(i),
            "category" => category = Some(i),
            _ => {}
        }
    }
    let description =
        description.ok_or_else(|| TallyError::MissingColumn("description".to_string()))?;
    Ok(ColumnMap {
        description,
        amount,
        date,
        category,
    })
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Read a statement CSV into transactions.
///
/// The header row is required and `description` must be present (after
/// lower-casing and trimming header names). `amount`, `date`, and `category`
/// are optional. Rows with an empty description are skipped. When a
/// `category` column exists its values are taken as-is; names outside the
/// closed set map to Other and the classifier is never consulted.
pub fn load_transactions(path: &Path) -> Result<Vec<Transaction>> {
    if !path.is_file() {
        return Err(TallyError::FileNotFound(path.display().to_string()));
    }
    let file = std::fs::File::open(path)?;
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(std::io::BufReader::new(file));

    let cols = map_columns(rdr.headers()?)?;

    let mut rows = Vec::new();
    for result in rdr.records() {
        let Ok(record) = result else { continue };
        let description = record
            .get(cols.description)
            .unwrap_or("")
            .trim()
            .to_string();
        if description.is_empty() {
            continue;
        }
        let amount = cols
            .amount
            .and_then(|i| record.get(i))
            .map(parse_amount)
            .unwrap_or(0.0);
        let date = cols.date.and_then(|i| record.get(i)).and_then(parse_date);
        let category = cols
            .category
            .and_then(|i| record.get(i))
            .map(|raw| Category::parse(raw).unwrap_or(Category::Other));
        rows.push(Transaction {
            date,
            description,
            amount,
            category,
        });
    }
    Ok(rows)
}

/// Fill in categories for rows that lack one. Returns how many rows the
/// classifier assigned, which is zero when the file already carried a category
/// column, in which case the classifier is not invoked at all.
pub fn ensure_categorized(rows: &mut [Transaction]) -> usize {
    let mut assigned = 0usize;
    for row in rows.iter_mut() {
        if row.category.is_none() {
            row.category = Some(classify(&row.description));
            assigned += 1;
        }
    }
    assigned
}
