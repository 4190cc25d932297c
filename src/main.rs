mod advisor;
#[cfg(feature = "chart")]
mod chart;
mod classifier;
mod cli;
mod error;
mod fmt;
mod loader;
mod models;
mod prompt;
mod settings;
mod summary;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        None => cli::analyze::run(None, false, false),
        Some(Commands::Analyze {
            file,
            no_chart,
            no_plan,
        }) => cli::analyze::run(file.as_deref(), no_chart, no_plan),
        Some(Commands::Summary { file }) => cli::summary::run(&file),
        #[cfg(feature = "chart")]
        Some(Commands::Chart { file }) => cli::chart::run(&file),
        Some(Commands::Advise { file }) => cli::advise::run(&file),
        Some(Commands::Plan) => cli::plan::run(),
        Some(Commands::Demo) => cli::demo::run(),
        Some(Commands::Config { currency, name }) => {
            cli::config::run(currency.as_deref(), name.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
