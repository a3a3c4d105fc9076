//! predash - Predictive analytics dashboard

mod cli;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "predash",
    version,
    about = "Predictive analytics dashboard",
    long_about = "A terminal dashboard over synthetic analytics datasets.\n\
                  \n\
                  Browse four datasets (sales, users, revenue, engagement) across\n\
                  metric cards, a 12-month historical chart, a forecast chart with\n\
                  confidence bounds, and a sortable raw-data table.\n\
                  \n\
                  Examples:\n\
                    predash                          # Run TUI (default)\n\
                    predash metrics sales            # Print metric cards\n\
                    predash info revenue             # Print dataset description\n\
                    predash table engagement --json  # Raw data rows as JSON\n\
                  \n\
                  Environment Variables:\n\
                    PREDASH_NO_COLOR                 # Disable ANSI colors (log-friendly)\n\
                    RUST_LOG                         # Log filter for non-TUI modes"
)]
struct Cli {
    #[command(subcommand)]
    mode: Option<Mode>,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, env = "PREDASH_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Mode {
    /// Run TUI interface (default)
    Tui,
    /// Print metric cards for a dataset and exit
    Metrics {
        /// Dataset id (sales, users, revenue, engagement)
        #[arg(default_value = "sales")]
        dataset: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print dataset description and exit
    Info {
        /// Dataset id (sales, users, revenue, engagement)
        #[arg(default_value = "sales")]
        dataset: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print raw data rows for a dataset and exit
    Table {
        /// Dataset id (sales, users, revenue, engagement)
        #[arg(default_value = "sales")]
        dataset: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let no_color = cli.no_color;

    match cli.mode.unwrap_or(Mode::Tui) {
        Mode::Tui => {
            // No logging to stdout/stderr while the alternate screen is up
            predash_tui::run().await?;
        }
        Mode::Metrics { dataset, json } => {
            init_logging();
            let metrics = predash_core::api::fetch_metrics(&dataset).await?;
            println!("{}", cli::format_metrics(&metrics, json, no_color));
        }
        Mode::Info { dataset, json } => {
            init_logging();
            let info = predash_core::api::fetch_dataset_info(&dataset).await?;
            println!("{}", cli::format_info(&info, json));
        }
        Mode::Table { dataset, json } => {
            init_logging();
            let rows = predash_core::api::fetch_table_data(&dataset).await?;
            println!("{}", cli::format_table(&rows, json, no_color));
        }
    }

    Ok(())
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
