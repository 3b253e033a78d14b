use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use cloner_engine::{ClientSettings, DEFAULT_ENDPOINT};
use cloner_logging::{LogDestination, DEFAULT_LOG_FILE};

use crate::platform::AppConfig;

/// Clone a website through the cloning service and inspect the result.
#[derive(Parser, Debug)]
#[command(name = "cloner", version)]
pub struct Args {
    /// Base address of the cloning service.
    #[arg(long, env = "CLONER_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Directory that receives downloaded clones.
    #[arg(long, env = "CLONER_EXPORT_DIR", default_value = "output")]
    pub export_dir: PathBuf,
    /// Give up on a clone request after this many seconds.
    #[arg(long, default_value_t = 180)]
    pub request_timeout_secs: u64,
    /// Where log output goes.
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,
    /// Log file used by the `file` and `both` targets.
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
}

impl Args {
    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
        }
    }

    pub fn app_config(&self) -> AppConfig {
        AppConfig {
            client: ClientSettings {
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                ..ClientSettings::with_endpoint(self.endpoint.clone())
            },
            export_dir: self.export_dir.clone(),
        }
    }
}
