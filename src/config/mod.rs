pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::model::{InputFormat, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_required_field, Validate};
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::domain::model::NameParts;
#[cfg(feature = "cli")]
use crate::utils::error::NameError;
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "namefmt")]
#[command(about = "Format first, middle and last name parts into a full name")]
pub struct CliConfig {
    #[arg(long, help = "First name")]
    pub first: Option<String>,

    #[arg(long, help = "Middle name")]
    pub middle: Option<String>,

    #[arg(long, help = "Last name")]
    pub last: Option<String>,

    #[arg(long, help = "Input file with name records (batch mode)")]
    pub input: Option<String>,

    #[arg(long, value_enum, help = "Input format, inferred from the file extension when omitted")]
    pub input_format: Option<InputFormat>,

    #[arg(long, help = "Output directory [default: ./output]")]
    pub output_path: Option<String>,

    #[arg(long, value_enum, help = "Output format [default: text]")]
    pub output_format: Option<OutputFormat>,

    #[arg(long, help = "Drop records whose full name is empty")]
    pub skip_empty: bool,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

/// CLI 的執行模式
#[cfg(feature = "cli")]
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Single(NameParts),
    Batch(RunConfig),
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn has_name_parts(&self) -> bool {
        self.first.is_some() || self.middle.is_some() || self.last.is_some()
    }

    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        self.config
            .as_deref()
            .map(|path| {
                validate_path("config", path)?;
                TomlConfig::from_file(path)
            })
            .transpose()
    }

    /// 合併命令列與設定檔，命令列參數優先
    pub fn mode(&self, file: Option<&TomlConfig>) -> Result<Mode> {
        self.validate()?;

        if self.has_name_parts() {
            return Ok(Mode::Single(NameParts {
                first: self.first.clone(),
                middle: self.middle.clone(),
                last: self.last.clone(),
            }));
        }

        let file = file.cloned().unwrap_or_default();
        let input_path = self.input.as_deref().or(file.input_path()).map(str::to_string);
        let input_path = validate_required_field("input", &input_path)?.clone();

        let config = RunConfig {
            input_format: self
                .input_format
                .or(file.input_format())
                .or_else(|| InputFormat::from_path(&input_path))
                .unwrap_or_default(),
            input_path,
            output_path: self
                .output_path
                .as_deref()
                .or(file.output_path())
                .unwrap_or(DEFAULT_OUTPUT_PATH)
                .to_string(),
            output_format: self.output_format.or(file.output_format()).unwrap_or_default(),
            skip_empty: self.skip_empty || file.skip_empty().unwrap_or(false),
        };
        config.validate()?;

        Ok(Mode::Batch(config))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if self.has_name_parts() && self.input.is_some() {
            return Err(NameError::InvalidConfigValueError {
                field: "input".to_string(),
                value: self.input.clone().unwrap_or_default(),
                reason: "--input cannot be combined with --first/--middle/--last".to_string(),
            });
        }
        if let Some(path) = self.input.as_deref() {
            validate_path("input", path)?;
        }
        if let Some(path) = self.output_path.as_deref() {
            validate_path("output_path", path)?;
        }
        Ok(())
    }
}

/// 批次模式最終生效的設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input_path: String,
    pub input_format: InputFormat,
    pub output_path: String,
    pub output_format: OutputFormat,
    pub skip_empty: bool,
}

impl RunConfig {
    pub fn from_toml(file: &TomlConfig) -> Result<Self> {
        let input_path = file.input_path().map(str::to_string);
        let input_path = validate_required_field("input.path", &input_path)?.clone();

        let config = Self {
            input_format: file
                .input_format()
                .or_else(|| InputFormat::from_path(&input_path))
                .unwrap_or_default(),
            input_path,
            output_path: file.output_path().unwrap_or(DEFAULT_OUTPUT_PATH).to_string(),
            output_format: file.output_format().unwrap_or_default(),
            skip_empty: file.skip_empty().unwrap_or(false),
        };
        config.validate()?;
        Ok(config)
    }
}

impl Validate for RunConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        Ok(())
    }
}

impl ConfigProvider for RunConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn input_format(&self) -> InputFormat {
        self.input_format
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    fn skip_empty(&self) -> bool {
        self.skip_empty
    }
}
