//! Layered application configuration.
//!
//! Precedence, lowest first: built-in defaults, the YAML file passed with
//! `--config`, `PROVIDER__*` environment variables (`__` separates nested
//! keys, e.g. `PROVIDER__CONTROLLER__POLL_INTERVAL=5m`), CLI overrides.

use std::path::Path;

use anyhow::{Context, bail};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Yaml};
use provider_kit::ControllerOptions;
use rediscloud_controller::Feature;
use serde::{Deserialize, Serialize};

/// Prefix of environment variables read into the configuration.
pub const ENV_PREFIX: &str = "PROVIDER__";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub controller: ControllerOptions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable text.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// `-v` count: 1 raises the level to debug, 2 or more to trace.
    pub verbose: u8,
    pub json_logs: bool,
    pub features: Vec<String>,
    pub max_concurrent_reconciles: Option<usize>,
}

impl AppConfig {
    /// Loads defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    ///
    /// Fails if the file does not exist or any layer does not match the
    /// configuration shape.
    pub fn load(config_path: Option<&Path>) -> anyhow::Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Self::default()));

        if let Some(path) = config_path {
            if !path.is_file() {
                bail!("config file does not exist: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("invalid configuration")
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        match cli.verbose {
            0 => {}
            1 => "debug".clone_into(&mut self.logging.level),
            _ => "trace".clone_into(&mut self.logging.level),
        }
        if cli.json_logs {
            self.logging.json = true;
        }
        self.controller
            .features
            .extend(cli.features.iter().cloned());
        if let Some(n) = cli.max_concurrent_reconciles {
            self.controller.max_concurrent_reconciles = n;
        }
    }

    /// Configured feature flags this provider does not know.
    #[must_use]
    pub fn unknown_features(&self) -> Vec<&str> {
        self.controller
            .features
            .iter()
            .map(String::as_str)
            .filter(|name| Feature::from_name(name).is_none())
            .collect()
    }
}
