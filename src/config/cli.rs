use crate::app::runner::Task;
use crate::config::toml_config::TomlConfig;
use crate::config::{OutputFormat, Settings};
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "math-ops")]
#[command(about = "Multiply non-negative integers and random digits")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    /// Optional TOML file with default settings
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format, overrides the config file
    #[arg(long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Multiply two non-negative integers
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// Multiply two random digits
    Random {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "1")]
        rounds: usize,
    },
    /// Draw random digits
    Digit {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value = "1")]
        count: usize,
    },
}

impl CliConfig {
    pub fn task(&self) -> Task {
        match self.command {
            Command::Multiply { a, b } => Task::Multiply { a, b },
            Command::Random { rounds, .. } => Task::Random { rounds },
            Command::Digit { count, .. } => Task::Digit { count },
        }
    }

    /// 合併設定檔與命令列參數，命令列優先
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::debug!("Loading config file: {}", path.display());
                TomlConfig::from_file(path)?.to_settings()
            }
            None => Settings::default(),
        };

        if let Some(format) = self.format {
            settings.format = format;
        }

        let seed = match &self.command {
            Command::Random { seed, .. } | Command::Digit { seed, .. } => *seed,
            Command::Multiply { .. } => None,
        };
        if seed.is_some() {
            settings.seed = seed;
        }

        Ok(settings)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match &self.command {
            Command::Random { rounds, .. } => validate_positive_number("rounds", *rounds, 1),
            Command::Digit { count, .. } => validate_positive_number("count", *count, 1),
            Command::Multiply { .. } => Ok(()),
        }
    }
}
