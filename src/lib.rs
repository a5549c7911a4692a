pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod remote;
pub mod runtime;
pub mod session;
pub mod ui;

pub fn run_cli() -> Result<(), String> {
    cli::run_cli()
}
