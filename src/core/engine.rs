use crate::core::Pipeline;
use crate::domain::model::ConversionReport;
use crate::utils::error::Result;

pub struct ConversionEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConversionEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<ConversionReport> {
        tracing::info!("Starting form conversion...");

        // Extract
        let questions = self.pipeline.extract().await?;
        tracing::info!("Extracted {} questions", questions.len());

        // Transform
        let output = self.pipeline.transform(questions).await?;
        tracing::info!(
            "Rendered {} fields ({} bytes of HTML)",
            output.preview.fields.len(),
            output.html_source.len()
        );

        // Load
        let preview = output.preview.clone();
        let output_path = self.pipeline.load(output).await?;
        tracing::info!("Output saved to: {}", output_path);

        Ok(ConversionReport {
            output_path,
            preview,
        })
    }
}
