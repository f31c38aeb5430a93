mod cli;

use clap::Parser;
use cli::{Args, Command};
use halftone::config::Config;

/// Install the logger; `-v` raises the default level, `RUST_LOG` wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    // Load config file
    // If --config is specified, require the file to exist
    // Otherwise, fall back to defaults if default config not found
    let cfg = if let Some(ref path) = args.config {
        match Config::load_from_explicit(path.clone()) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        match Config::load() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Warning: Failed to load config file: {}", e);
                eprintln!("Using default settings.\n");
                Config::default()
            }
        }
    };

    let result = match args.command {
        Command::Render(ref render) => cli::run_render(render, &cfg).map(|_| ()),
        Command::Pattern(ref pattern) => cli::run_pattern(pattern, &cfg).map(|_| ()),
        Command::Config { action } => {
            cli::handle_config_action(action, args.config.as_deref(), &cfg);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
