pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "esquadria",
    about = "Esquadria pricing operator CLI",
    long_about = "Quote catalog products, list available sizes, and inspect the embedded \
                  catalog and effective pricing policy.",
    after_help = "Examples:\n  esquadria quote --product two_leaf_sliding_window --color white \
                  --orientation left --width 1200 --height 1000\n  esquadria sizes --product \
                  maxim_air_window --color bronze\n  esquadria catalog --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Resolve a price quote for one product configuration")]
    Quote(commands::quote::QuoteArgs),
    #[command(about = "List the cataloged sizes for a product configuration")]
    Sizes(commands::sizes::SizesArgs),
    #[command(about = "Validate the embedded catalog and print an integrity summary")]
    Catalog(commands::catalog::CatalogArgs),
    #[command(about = "Print the effective pricing policy after file and env overrides")]
    Config(commands::config::ConfigArgs),
}

pub fn run() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Quote(args) => commands::quote::run(&args),
        Command::Sizes(args) => commands::sizes::run(&args),
        Command::Catalog(args) => commands::catalog::run(&args),
        Command::Config(args) => commands::config::run(&args),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env("ESQUADRIA_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).with_target(false).try_init();
}
