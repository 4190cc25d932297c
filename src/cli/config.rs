use crate::error::Result;
use crate::settings::{load_settings, save_settings};

pub fn run(currency: Option<&str>, name: Option<&str>) -> Result<()> {
    let mut settings = load_settings();
    let mut changed = false;
    if let Some(c) = currency {
        settings.currency = c.to_string();
        changed = true;
    }
    if let Some(n) = name {
        settings.user_name = n.to_string();
        changed = true;
    }
    if changed {
        save_settings(&settings)?;
        println!("Settings saved.");
    }
    println!("Currency symbol: {}", settings.currency);
    if settings.user_name.is_empty() {
        println!("Name:            (not set)");
    } else {
        println!("Name:            {}", settings.user_name);
    }
    Ok(())
}
