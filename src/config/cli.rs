use crate::config::toml_config::AppConfig;
use crate::core::report::OutputFormat;
use crate::domain::model::{Locale, SizeCategory};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "pet-age")]
#[command(about = "Convert a pet's age into human-equivalent years")]
pub struct CliConfig {
    /// Path to TOML configuration file (defaults to ./pet-age.toml if present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Preference file holding the last submitted input
    #[arg(long, global = true)]
    pub store: Option<String>,

    #[arg(long, global = true, value_enum)]
    pub locale: Option<Locale>,

    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Calculate ages and remember the input
    Calc {
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth: Option<String>,

        #[arg(long, value_enum)]
        size: Option<SizeCategory>,

        /// Compute as of this date instead of now
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Recompute the last remembered input
    Show {
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Forget the remembered input
    Clear,
    /// Print the lookup table
    Table {
        #[arg(long, value_enum)]
        size: Option<SizeCategory>,
    },
    /// Convert a CSV of name,birth_date,size rows
    Batch {
        #[arg(long)]
        input: PathBuf,

        /// Output CSV (stdout when omitted)
        #[arg(long)]
        output: Option<PathBuf>,

        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
}

impl CliConfig {
    /// 讀取配置檔，再套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = AppConfig::load(self.config.as_deref())?;

        if let Some(store) = &self.store {
            config.storage.path = store.clone();
        }
        if let Some(locale) = self.locale {
            config.display.locale = locale;
        }
        if let Some(format) = self.format {
            config.display.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}
