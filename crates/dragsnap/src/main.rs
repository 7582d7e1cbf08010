mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "dragsnap",
    version,
    about = "Move and resize windows by dragging anywhere with a modifier chord"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// Watch for drag chords in the foreground until Ctrl+C
    Run(commands::run::RunArgs),
    /// Print the effective configuration
    Config(commands::config::ConfigArgs),
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// List top-level windows and how the filter treats them
    List,
    /// List monitors with their bounds and work areas
    Monitors,
    /// Move a window to a specific position and size
    Move(commands::debug::move_window::MoveArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Run(args) => commands::run::execute(&args),
        Commands::Config(args) => commands::config::execute(&args),
        Commands::Debug { command } => match command {
            DebugCommands::List => commands::debug::list::execute(),
            DebugCommands::Monitors => commands::debug::monitors::execute(),
            DebugCommands::Move(args) => commands::debug::move_window::execute(&args),
        },
    }
}
