use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// 姓名的三個組成部分，每一個都可以缺席。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameParts {
    #[serde(rename = "first_name", alias = "firstName", alias = "first", default)]
    pub first: Option<String>,

    #[serde(rename = "middle_name", alias = "middleName", alias = "middle", default)]
    pub middle: Option<String>,

    #[serde(rename = "last_name", alias = "lastName", alias = "last", default)]
    pub last: Option<String>,
}

impl NameParts {
    pub fn new<F, M, L>(first: Option<F>, middle: Option<M>, last: Option<L>) -> Self
    where
        F: Into<String>,
        M: Into<String>,
        L: Into<String>,
    {
        Self {
            first: first.map(Into::into),
            middle: middle.map(Into::into),
            last: last.map(Into::into),
        }
    }

    pub fn with_first(mut self, first: impl Into<String>) -> Self {
        self.first = Some(first.into());
        self
    }

    pub fn with_middle(mut self, middle: impl Into<String>) -> Self {
        self.middle = Some(middle.into());
        self
    }

    pub fn with_last(mut self, last: impl Into<String>) -> Self {
        self.last = Some(last.into());
        self
    }

    /// 依 first、middle、last 順序列出有值且非空的部分
    pub fn present_parts(&self) -> impl Iterator<Item = &str> {
        [&self.first, &self.middle, &self.last]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .filter(|part| !part.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedName {
    #[serde(flatten)]
    pub parts: NameParts,
    pub full_name: String,
}

#[derive(Debug, Clone)]
pub struct FormatResult {
    pub names: Vec<FormattedName>,
    pub body: String,
    pub empty_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum InputFormat {
    #[default]
    Json,
    Jsonl,
    Csv,
}

impl InputFormat {
    /// 依副檔名推斷輸入格式，無法辨識時回傳 None
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let extension = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "jsonl" | "ndjson" => Some(Self::Jsonl),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Csv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }

    pub fn file_name(&self) -> String {
        format!("full_names.{}", self.extension())
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Text => "text",
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}
