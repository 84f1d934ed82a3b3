use crate::domain::model::{FormatResult, InputFormat, NameParts, OutputFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn input_format(&self) -> InputFormat;
    fn output_path(&self) -> &str;
    fn output_format(&self) -> OutputFormat;
    fn skip_empty(&self) -> bool;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<NameParts>>;
    async fn transform(&self, data: Vec<NameParts>) -> Result<FormatResult>;
    async fn load(&self, result: FormatResult) -> Result<String>;
}
