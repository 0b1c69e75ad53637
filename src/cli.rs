//! Command-line interface argument parsing.
//!
//! This module handles all CLI argument parsing using clap,
//! including validation. Every override is optional so that values from
//! the config file survive unless a flag is actually given.

use clap::Parser;
use std::path::PathBuf;

/// User Service - user lookup with product-service aggregation
///
/// Serves the user catalog over HTTP and combines it with data from the
/// product service, degrading to partial results when it is down.
///
/// Examples:
///   user-service
///   user-service --port 8081 --product-service-url http://localhost:8082
///   user-service --config ./deploy/user-service.toml --verbose
///   user-service --init-config
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Args {
    /// Interface to bind (default from config: 0.0.0.0)
    #[arg(long, value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (default from config: 8081)
    #[arg(short, long, value_name = "PORT", env = "USER_SERVICE_PORT")]
    pub port: Option<u16>,

    /// Base URL of the product service
    ///
    /// Registers the address of the configured collaborator name
    /// (product-service by default), replacing the config file entry.
    #[arg(long, value_name = "URL", env = "PRODUCT_SERVICE_URL")]
    pub product_service_url: Option<String>,

    /// Product-service request timeout in seconds
    ///
    /// Without it, calls use the HTTP client's default.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Path to configuration file
    ///
    /// If not specified, looks for .user-service.toml in the current directory
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,

    /// Run in quiet mode (errors only)
    #[arg(short, long)]
    pub quiet: bool,

    /// Generate a default .user-service.toml configuration file
    #[arg(long)]
    pub init_config: bool,
}

impl Args {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate the parsed arguments.
    pub fn validate(&self) -> Result<(), String> {
        if self.init_config {
            return Ok(());
        }

        if self.verbose && self.quiet {
            return Err("Cannot use both --verbose and --quiet".to_string());
        }

        if self.port == Some(0) {
            return Err("Port must be between 1 and 65535".to_string());
        }

        if self.timeout == Some(0) {
            return Err("Timeout must be at least 1 second".to_string());
        }

        if let Some(ref url) = self.product_service_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err("Product service URL must start with 'http://' or 'https://'".to_string());
            }
        }

        Ok(())
    }

    /// Returns the log level based on verbosity settings.
    pub fn log_level(&self) -> tracing::Level {
        if self.quiet {
            tracing::Level::ERROR
        } else if self.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        }
    }
}
