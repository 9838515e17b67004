use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use ecoflight_cli::output::OutputFormat;

mod commands;

use commands::route::RouteArgs;

#[derive(Parser, Debug)]
#[command(author, version, about = "EcoFlight fuel- and time-aware route optimizer")]
struct Cli {
    /// Directory containing airports.csv, routes.csv, and aircraft.csv.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the minimum-cost path between two airports.
    Route(RouteArgs),
    /// List up to `--count` distinct paths, cheapest first.
    Alternatives {
        #[command(flatten)]
        route: RouteArgs,
        /// Number of paths to return.
        #[arg(long, default_value_t = 3)]
        count: usize,
    },
    /// List the aircraft in the catalog.
    Aircraft,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.data_dir.as_deref();

    match &cli.command {
        Command::Route(args) => commands::route::handle_route(data_dir, cli.format, args),
        Command::Alternatives { route, count } => {
            commands::route::handle_alternatives(data_dir, cli.format, route, *count)
        }
        Command::Aircraft => commands::aircraft::handle_list_aircraft(data_dir, cli.format),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
