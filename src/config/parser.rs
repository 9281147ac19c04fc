//! Configuration parsing from CLI arguments and environment variables

use crate::{
    cli::Cli,
    models::Config,
    error::Result,
    config::env::EnvManager,
};

/// Configuration parser that combines CLI arguments with environment variables
pub struct ConfigParser {
    cli: Cli,
}

impl ConfigParser {
    /// Create a new configuration parser with CLI arguments
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Parse and build the complete configuration
    pub fn parse(&self) -> Result<Config> {
        let mut config = Config::default();

        EnvManager::load_env_file()?;
        config.merge_from_env()?;

        self.apply_cli_overrides(&mut config);
        config.validate()?;

        Ok(config)
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(&self, config: &mut Config) {
        config.input_path = self.cli.input.clone();

        if self.cli.no_color {
            config.enable_color = false;
        }

        // CLI-only flags
        config.verbose = self.cli.verbose;
        config.debug = self.cli.debug;
    }
}

/// Convenience function to load configuration from CLI args
pub fn load_config(cli: Cli) -> Result<Config> {
    ConfigParser::new(cli).parse()
}

/// Display configuration summary for debugging
pub fn display_config_summary(config: &Config) -> String {
    let mut summary = String::new();

    summary.push_str("Configuration:\n");
    summary.push_str(&format!("  Input: {}\n", config.input_path.display()));
    summary.push_str(&format!("  Colored diagnostics: {}\n", config.enable_color));
    summary.push_str(&format!("  Verbose: {}\n", config.verbose));
    summary.push_str(&format!("  Debug: {}\n", config.debug));
    summary.push_str(&format!("  Log level: {}\n", config.effective_log_level().as_str()));
    summary.push_str(&format!("  Log format: {:?}\n", config.effective_log_format()));

    summary
}
