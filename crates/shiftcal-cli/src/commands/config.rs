//! Configuration commands.

use std::path::Path;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Renders the effective configuration as TOML.
pub fn render(config: &ClientConfig) -> ClientResult<String> {
    toml::to_string_pretty(config)
        .map_err(|e| ClientError::Config(format!("failed to serialize config: {}", e)))
}

/// Dump the current configuration to stdout.
pub fn dump(config: &ClientConfig, source: &Path) -> ClientResult<()> {
    println!("# config.toml ({})", source.display());
    println!("{}", render(config)?);
    Ok(())
}

/// Validate the configuration.
pub fn validate(config: &ClientConfig) -> ClientResult<()> {
    config.validate()?;
    println!("Configuration is valid.");
    Ok(())
}

/// Show the configuration file path.
pub fn path(source: &Path) -> ClientResult<()> {
    println!("config: {}", source.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_round_trips() {
        let config = ClientConfig {
            year: 2025,
            ..Default::default()
        };
        let text = render(&config).unwrap();
        assert!(text.contains("year = 2025"));
        assert!(text.contains("[locations]"));
        assert_eq!(ClientConfig::parse(&text).unwrap(), config);
    }

    #[test]
    fn validate_rejects_empty_title() {
        let config = ClientConfig {
            title: String::new(),
            ..Default::default()
        };
        assert!(matches!(validate(&config), Err(ClientError::Config(_))));
    }
}
