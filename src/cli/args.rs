//! CLI argument definitions
//!
//! Git runs the hook without arguments; every flag here is an override for
//! manual runs or wrapper scripts.

use std::path::Path;
use std::time::Duration;

use clap::Parser;

use crate::app::Settings;
use crate::config::Config;
use crate::consts::DEFAULT_TIMEOUT;
use crate::gate::derive_app_name;

#[derive(Parser, Debug)]
#[command(name = "tsuru-pre-receive")]
#[command(
    about = "Git pre-receive hook that refuses pushes while the tsuru app is unavailable",
    version
)]
pub(crate) struct Cli {
    /// tsuru API base URL (default: $TSURU_HOST)
    #[arg(long, value_name = "URL")]
    pub(crate) host: Option<String>,

    /// App name (default: repository directory name without ".git")
    #[arg(long, value_name = "NAME")]
    pub(crate) app: Option<String>,

    /// Request timeout in seconds [default: 1800]
    #[arg(long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub(crate) timeout: Option<u64>,

    /// Enable debug output (resolved URL, status, timing)
    #[arg(long)]
    pub(crate) debug: bool,
}

impl Cli {
    /// Merge config file values into CLI (CLI args take precedence)
    pub(crate) fn with_config(mut self, config: &Config) -> Self {
        if !self.debug && config.debug {
            self.debug = true;
        }
        if self.timeout.is_none() {
            // Zero would fail every request immediately; treat it as unset.
            self.timeout = config.timeout_secs.filter(|secs| *secs > 0);
        }
        self
    }

    /// Host precedence: --host, then the environment, then the config file.
    /// An environment variable set to "" still counts as set.
    pub(crate) fn resolve_host(&self, env_host: Option<String>, config: &Config) -> String {
        self.host
            .clone()
            .or(env_host)
            .or_else(|| config.host.clone())
            .unwrap_or_default()
    }

    pub(crate) fn timeout(&self) -> Duration {
        self.timeout
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TIMEOUT)
    }

    pub(crate) fn settings(&self, env_host: Option<String>, config: &Config, cwd: &Path) -> Settings {
        Settings {
            host: self.resolve_host(env_host, config),
            app: self
                .app
                .clone()
                .unwrap_or_else(|| derive_app_name(cwd)),
            timeout: self.timeout(),
        }
    }
}
