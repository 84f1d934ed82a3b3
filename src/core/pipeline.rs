use crate::core::formatter::full_name;
use crate::core::{ConfigProvider, FormatResult, FormattedName, NameParts, Pipeline, Storage};
use crate::domain::model::{InputFormat, OutputFormat};
use crate::utils::error::{NameError, Result};
use std::path::Path;

const CSV_HEADER: [&str; 4] = ["first_name", "middle_name", "last_name", "full_name"];

pub struct NamePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> NamePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for NamePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<NameParts>> {
        let input_path = self.config.input_path();
        let format = self.config.input_format();
        tracing::debug!("Reading {:?} input from: {}", format, input_path);

        let data = self.storage.read_file(input_path).await?;
        tracing::debug!("Read {} bytes", data.len());

        parse_names(&data, format)
    }

    async fn transform(&self, data: Vec<NameParts>) -> Result<FormatResult> {
        let mut names = Vec::with_capacity(data.len());
        let mut empty_count = 0;

        for (index, parts) in data.into_iter().enumerate() {
            let formatted = full_name(&parts);

            if formatted.is_empty() {
                empty_count += 1;
                tracing::debug!("Record {} has no name parts", index + 1);
                if self.config.skip_empty() {
                    continue;
                }
            }

            names.push(FormattedName {
                parts,
                full_name: formatted,
            });
        }

        let body = render_names(&names, self.config.output_format())?;

        Ok(FormatResult {
            names,
            body,
            empty_count,
        })
    }

    async fn load(&self, result: FormatResult) -> Result<String> {
        let file_name = self.config.output_format().file_name();
        let output_path = Path::new(self.config.output_path())
            .join(file_name)
            .to_string_lossy()
            .into_owned();

        tracing::debug!(
            "Writing {} names as {} ({} bytes) to {}",
            result.names.len(),
            self.config.output_format(),
            result.body.len(),
            output_path
        );
        self.storage
            .write_file(&output_path, result.body.as_bytes())
            .await?;

        Ok(output_path)
    }
}

/// 依輸入格式解析姓名資料
pub fn parse_names(data: &[u8], format: InputFormat) -> Result<Vec<NameParts>> {
    match format {
        InputFormat::Json => parse_json(data),
        InputFormat::Jsonl => parse_json_lines(data),
        InputFormat::Csv => parse_csv(data),
    }
}

fn parse_json(data: &[u8]) -> Result<Vec<NameParts>> {
    let value: serde_json::Value = serde_json::from_slice(data)?;

    // 單一物件視為只有一筆資料
    let names: Vec<NameParts> = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(names)
}

fn parse_json_lines(data: &[u8]) -> Result<Vec<NameParts>> {
    let mut names = Vec::new();
    for (index, raw_line) in data.split(|byte| *byte == b'\n').enumerate() {
        let line = std::str::from_utf8(raw_line).map_err(|e| NameError::InputError {
            line: index + 1,
            message: e.to_string(),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let parts = serde_json::from_str(line).map_err(|e| NameError::InputError {
            line: index + 1,
            message: e.to_string(),
        })?;
        names.push(parts);
    }
    Ok(names)
}

fn parse_csv(data: &[u8]) -> Result<Vec<NameParts>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(data);

    let mut names = Vec::new();
    for record in reader.deserialize::<NameParts>() {
        names.push(record?);
    }
    Ok(names)
}

/// 依輸出格式產生輸出內容
pub fn render_names(names: &[FormattedName], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(names
            .iter()
            .map(|name| format!("{}\n", name.full_name))
            .collect()),
        OutputFormat::Csv => render_csv(names),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(names)? + "\n"),
    }
}

fn render_csv(names: &[FormattedName]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for name in names {
        writer.write_record([
            name.parts.first.as_deref().unwrap_or(""),
            name.parts.middle.as_deref().unwrap_or(""),
            name.parts.last.as_deref().unwrap_or(""),
            name.full_name.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| NameError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| NameError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
