use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct NameEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> NameEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        tracing::info!("Starting name formatting");

        // Extract
        let records = self.pipeline.extract().await?;
        tracing::info!("Extracted {} records", records.len());

        // Transform
        let result = self.pipeline.transform(records).await?;
        if result.empty_count > 0 {
            tracing::warn!("{} records had no name parts", result.empty_count);
        }
        tracing::info!("Formatted {} names", result.names.len());

        // Load
        let output_path = self.pipeline.load(result).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(output_path)
    }
}
