//! Summary demo binary
//!
//! Declares a small set of namespaced subcommands and renders its own
//! summary screen, showing the grouped table end to end.

use clap::{CommandFactory, Parser, Subcommand};
use console_summary::logging::{init_logging, LoggingConfig};
use console_summary::{AnsiSink, ApplicationDescriptor, PlainSink, SummaryRenderer};
use std::io;
use std::process;
use tracing::{debug, error};

#[derive(Parser)]
#[command(name = "summary", version, about = "Command summary screen demo")]
struct Cli {
    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Log level: trace, debug, info, warn, error, off
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Option<DemoCommands>,
}

#[derive(Subcommand)]
enum DemoCommands {
    /// Start the application server
    Serve,
    /// Run database migrations
    #[command(name = "db:migrate")]
    DbMigrate,
    /// Seed the database with sample data
    #[command(name = "db:seed")]
    DbSeed,
    /// Flush the application cache
    #[command(name = "cache:clear")]
    CacheClear,
}

fn main() {
    let cli = Cli::parse();

    let logging_config = LoggingConfig {
        level: cli.log_level.clone(),
        color: !cli.no_color,
        ..LoggingConfig::default()
    };
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    if cli.command.is_some() {
        debug!("demo subcommands carry no behavior; rendering the summary");
    }

    let app = ApplicationDescriptor::from_clap(&Cli::command());
    let renderer = SummaryRenderer::new("summary");

    let result = if cli.no_color {
        renderer.render(&app, &mut PlainSink::new(io::stdout().lock()))
    } else {
        renderer.render(&app, &mut AnsiSink::new(io::stdout().lock()))
    };

    if let Err(e) = result {
        error!("Summary rendering failed: {}", e);
        eprintln!("{}", e);
        process::exit(1);
    }
}
