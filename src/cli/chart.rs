use std::path::Path;

use crate::error::Result;
use crate::loader;
use crate::settings::load_settings;
use crate::summary::summarize;

pub fn run(file: &str) -> Result<()> {
    let settings = load_settings();
    let mut rows = loader::load_transactions(Path::new(file))?;
    loader::ensure_categorized(&mut rows);
    let summary = summarize(&rows);
    crate::chart::show_pie_chart(&summary, &settings.currency)
}
