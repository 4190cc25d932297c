pub mod advise;
pub mod analyze;
#[cfg(feature = "chart")]
pub mod chart;
pub mod config;
pub mod demo;
pub mod plan;
pub mod summary;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "tally", about = "Personal spending analyzer for bank CSV exports.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Full walkthrough: summary, suggestions, pie chart, savings plan.
    Analyze {
        /// Path to a CSV statement (prompted for when omitted)
        file: Option<String>,
        /// Skip the pie chart
        #[arg(long = "no-chart")]
        no_chart: bool,
        /// Skip the interactive savings-plan questions
        #[arg(long = "no-plan")]
        no_plan: bool,
    },
    /// Print the spending summary for a CSV statement.
    Summary {
        /// Path to a CSV statement
        file: String,
    },
    /// Show spending as a pie chart.
    #[cfg(feature = "chart")]
    Chart {
        /// Path to a CSV statement
        file: String,
    },
    /// Print budget suggestions for a CSV statement.
    Advise {
        /// Path to a CSV statement
        file: String,
    },
    /// Answer a few questions and get savings advice.
    Plan,
    /// Write a sample statement and analyze it.
    Demo,
    /// Show or change settings.
    Config {
        /// Currency symbol used in reports
        #[arg(long)]
        currency: Option<String>,
        /// Name used in greetings
        #[arg(long)]
        name: Option<String>,
    },
}
