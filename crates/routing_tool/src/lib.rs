//! # Routing Tool
//!
//! Command-line front end for the routing address calculations in
//! `routing_defs`. Hardware parameters come from a TOML file.
//!
//! ## Quick Start
//!
//! ```bash
//! # Nodes per level for a 20-core placement
//! routing cost 20
//!
//! # Mesh coordinate of a fully specified path (L4 first)
//! routing coord 10 01 11 00 10
//!
//! # Replication mask for a set of cores, then the cores it addresses
//! routing rid 4,8 5,8 4,9 5,9
//! routing expand 4,8 1,1 --json
//! ```
//!
//! ## Configuration
//!
//! The tool loads configuration from a TOML file (default: `routing.toml`).
//! If the file doesn't exist, a default configuration will be created.

use tracing::error;

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

use app::Application;
use cli::CliArgs;
use config::AppConfig;

pub use config::LoggingSettings;
pub use error::ToolError;

/// Entry point of the routing tool.
///
/// Parses arguments, initializes logging from the configuration file and
/// prints the result of the requested command to stdout.
///
/// # Exit Codes
///
/// * **0**: The command succeeded
/// * **1**: Configuration or routing error
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    // Load configuration to get logging settings
    let mut logging = AppConfig::load_from_file(&args.config_path)
        .unwrap_or_default()
        .logging;
    if let Some(level) = &args.log_level {
        logging.level = level.clone();
    }

    if let Err(e) = logging::setup_logging(&logging, args.json_logs) {
        eprintln!("❌ Failed to setup logging: {e}");
        std::process::exit(1);
    }

    let output = Application::new(args).and_then(|app| app.run());
    match output {
        Ok(output) => println!("{output}"),
        Err(e) => {
            error!("❌ Routing command failed: {e}");
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}
