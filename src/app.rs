//! Main application orchestration and execution

use crate::{
    analyser::MetricsAnalyser,
    cli::{supports_color, Cli},
    config::{display_config_summary, env::ENV_FILE, load_config},
    error::{ErrorReporter, Result},
    log_debug,
    logging::{Logger, LoggerFactory},
    models::Config,
    output::OutputCoordinator,
};
use std::path::Path;

/// Build metadata stamped by build.rs
pub const BUILD_TIME: &str = env!("BUILD_TIME");
pub const GIT_COMMIT: &str = env!("GIT_COMMIT");

/// Main application struct that coordinates all components
pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance, resolving configuration from the
    /// CLI, `.env` and the environment
    pub fn new(cli: Cli) -> Result<Self> {
        Ok(Self::from_config(load_config(cli)?))
    }

    /// Create an application instance from an already resolved configuration
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Error reporter honouring the resolved colour and verbosity settings
    pub fn error_reporter(&self) -> ErrorReporter {
        ErrorReporter::new(
            self.config.enable_color && supports_color(),
            self.config.verbose || self.config.debug,
        )
    }

    /// Run the application and return the rendered report
    pub fn run(&self) -> Result<String> {
        run_with_config(&self.config)
    }
}

/// Analyse the configured input and render the report
pub fn run_with_config(config: &Config) -> Result<String> {
    let factory = LoggerFactory::new(config.clone());
    let logger = factory.create_logger("app");

    if config.debug {
        log_build_info(&logger);
        log_debug!(logger, "{}", display_config_summary(config).trim_end());
        log_debug!(logger, "Environment file {} present: {}", ENV_FILE, Path::new(ENV_FILE).exists());
    }

    let analyser = MetricsAnalyser::new(factory.create_logger("analyser"));
    let report = analyser.run(&config.input_path).map_err(|e| {
        logger.debug("Analysis failed").error_info(&e).log();
        e
    })?;

    let output = OutputCoordinator::default().display_report(&report)?;

    logger.info("Report generated")
        .field("underperforming", report.has_underperformance())
        .log();

    Ok(output)
}

fn log_build_info(logger: &Logger) {
    logger.debug("Build information")
        .field("version", crate::VERSION)
        .field("build_time", BUILD_TIME)
        .field("git_commit", GIT_COMMIT)
        .field("target", env!("TARGET_TRIPLE"))
        .log();
}
