use clap::Args;

use super::run::load_config;

/// Arguments for the `config` subcommand.
#[derive(Args)]
pub struct ConfigArgs {
    /// Print the config file path instead of its contents
    #[arg(long)]
    path: bool,
}

/// Prints the configuration in effect: the file merged over defaults
/// and validated.
pub fn execute(args: &ConfigArgs) {
    if args.path {
        match dragsnap_core::config::config_path() {
            Some(path) => println!("{}", path.display()),
            None => {
                eprintln!("Error: could not determine home directory.");
                std::process::exit(1);
            }
        }
        return;
    }

    let config = load_config();
    match toml::to_string_pretty(&config) {
        Ok(text) => print!("{text}"),
        Err(e) => {
            eprintln!("Error: could not serialize config: {e}");
            std::process::exit(1);
        }
    }
}
