pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Mode};

pub use config::{cli::LocalStorage, RunConfig};

pub use config::toml_config::TomlConfig;
pub use core::{engine::NameEngine, formatter::full_name, pipeline::NamePipeline};
pub use domain::model::{FormatResult, FormattedName, InputFormat, NameParts, OutputFormat};
pub use utils::error::{NameError, Result};
