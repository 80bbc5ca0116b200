//! yaml2json CLI - Convert input.yaml into output.json

mod cli;

use yaml2json::core::logging::init_logging;

fn main() {
    if let Err(e) = init_logging(None, None) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    let app = cli::Yaml2JsonApp::new();

    match app.run() {
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("Error {}", e);
            std::process::exit(1);
        }
    }
}
