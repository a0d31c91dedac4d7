mod app;
mod cli;
mod config;
mod consts;
mod error;
mod gate;
mod utils;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use cli::Cli;
use config::Config;
use consts::HOST_ENV;
use gate::HttpPlatform;
use utils::{debug_enabled, set_debug};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::load(cli.debug);
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    // Git runs pre-receive from inside the repository directory.
    let cwd = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            if debug_enabled() {
                eprintln!("Failed to read current directory: {e}");
            }
            PathBuf::new()
        }
    };

    let settings = cli.settings(std::env::var(HOST_ENV).ok(), &config, &cwd);
    let platform = HttpPlatform::new(settings.timeout);
    let outcome = app::run(&settings, &platform, &mut std::io::stderr());

    ExitCode::from(outcome.exit_code())
}
