#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    websat::logging::init();

    if let Err(error) = websat::run_cli() {
        eprintln!("{error}");
        std::process::exit(1);
    }
}
