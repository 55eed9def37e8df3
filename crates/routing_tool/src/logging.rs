//! Tracing subscriber for the routing tool.
//!
//! Command results go to stdout, so every log line is written to stderr.

use crate::config::LoggingSettings;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Whether log lines should be emitted as JSON.
///
/// The `--json-logs` flag wins over the config file.
fn wants_json(config: &LoggingSettings, json_flag: bool) -> bool {
    json_flag || config.json_format
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn setup_logging(
    config: &LoggingSettings,
    json_format: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.level));
    let registry = tracing_subscriber::registry().with(filter);

    if wants_json(config, json_format) {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?;
    }

    debug!("Routing tool logging at level {}", config.level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_flag_overrides_config() {
        let mut config = LoggingSettings::default();
        assert!(!wants_json(&config, false));
        assert!(wants_json(&config, true));

        config.json_format = true;
        assert!(wants_json(&config, false));
    }
}
