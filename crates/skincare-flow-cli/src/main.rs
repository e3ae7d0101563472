use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

mod commands;
mod logging;
mod render;

#[derive(Parser)]
#[command(
    name = "skincare-flow",
    version,
    about = "Guided morning and evening skincare routine"
)]
struct Cli {
    /// More log output on stderr (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Config file (defaults to $SKINCARE_FLOW_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through today's routine interactively
    Run(commands::run::RunArgs),
    /// Print the step sequence of a phase
    Steps(commands::steps::StepsArgs),
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Run(args) => commands::run::run(args, cli.config.as_deref()),
        Commands::Steps(args) => commands::steps::run(args),
        Commands::Config { action } => commands::config::run(action, cli.config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
