use crate::core::convert::{build_output, fetch_questions};
use crate::core::{ConfigProvider, ConversionOutput, PageFetcher, Pipeline, QuestionRecord, Storage};
use crate::utils::error::Result;

pub struct FormPipeline<S: Storage, C: ConfigProvider, F: PageFetcher> {
    storage: S,
    config: C,
    fetcher: F,
}

impl<S: Storage, C: ConfigProvider, F: PageFetcher> FormPipeline<S, C, F> {
    pub fn new(storage: S, config: C, fetcher: F) -> Self {
        Self {
            storage,
            config,
            fetcher,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider, F: PageFetcher> Pipeline for FormPipeline<S, C, F> {
    async fn extract(&self) -> Result<Vec<QuestionRecord>> {
        fetch_questions(&self.fetcher, self.config.source_url()).await
    }

    async fn transform(&self, questions: Vec<QuestionRecord>) -> Result<ConversionOutput> {
        Ok(build_output(self.config.source_url(), &questions))
    }

    async fn load(&self, output: ConversionOutput) -> Result<String> {
        let filename = self.config.output_filename();
        let output_path = format!("{}/{}", self.config.output_path(), filename);

        tracing::debug!(
            "Writing {} bytes of HTML to storage",
            output.html_source.len()
        );
        self.storage
            .write_file(filename, output.html_source.as_bytes())
            .await?;

        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::engine::ConversionEngine;
    use crate::utils::error::ConvertError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone)]
    struct MockStorage {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            let files = self.files.lock().await;
            files.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            let mut files = self.files.lock().await;
            files.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        source_url: String,
    }

    impl MockConfig {
        fn new(source_url: &str) -> Self {
            Self {
                source_url: source_url.to_string(),
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn source_url(&self) -> &str {
            &self.source_url
        }

        fn proxy_endpoint(&self) -> Option<&str> {
            None
        }

        fn output_path(&self) -> &str {
            "test_output"
        }

        fn output_filename(&self) -> &str {
            "form.html"
        }
    }

    struct StaticFetcher(String);

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch_page(&self, _url: &str) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    const SOURCE_URL: &str = "https://docs.google.com/forms/d/e/X/viewform";

    fn survey_page() -> String {
        r#"<html><script>var FB_PUBLIC_LOAD_DATA_ = [null,[null,[[1,"Name",null,0,[["10",null]]],[2,"Colour",null,2,[["11",[["Red"],["Blue"]]]]],[3,"Toppings",null,4,[["12",[["Cheese"],["Olives"]]]]]]]];</script></html>"#
            .to_string()
    }

    #[tokio::test]
    async fn test_extract_decodes_questions() {
        let pipeline = FormPipeline::new(
            MockStorage::new(),
            MockConfig::new(SOURCE_URL),
            StaticFetcher(survey_page()),
        );

        let questions = pipeline.extract().await.unwrap();

        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].entry_id, "10");
        assert_eq!(questions[2].options.len(), 2);
    }

    #[tokio::test]
    async fn test_extract_rejects_non_form_url() {
        let pipeline = FormPipeline::new(
            MockStorage::new(),
            MockConfig::new("https://example.com/survey"),
            StaticFetcher(survey_page()),
        );

        assert!(matches!(
            pipeline.extract().await,
            Err(ConvertError::InvalidUrl { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_writes_html_file() {
        let storage = MockStorage::new();
        let pipeline = FormPipeline::new(
            storage.clone(),
            MockConfig::new(SOURCE_URL),
            StaticFetcher(survey_page()),
        );

        let questions = pipeline.extract().await.unwrap();
        let output = pipeline.transform(questions).await.unwrap();
        let expected = output.html_source.clone();
        let output_path = pipeline.load(output).await.unwrap();

        assert_eq!(output_path, "test_output/form.html");
        let written = storage.get_file("form.html").await.unwrap();
        assert_eq!(String::from_utf8(written).unwrap(), expected);
    }

    #[tokio::test]
    async fn test_engine_reports_preview() {
        let storage = MockStorage::new();
        let pipeline = FormPipeline::new(
            storage.clone(),
            MockConfig::new(SOURCE_URL),
            StaticFetcher(survey_page()),
        );
        let engine = ConversionEngine::new(pipeline);

        let report = engine.run().await.unwrap();

        assert_eq!(report.output_path, "test_output/form.html");
        assert_eq!(report.preview.fields.len(), 3);
        assert!(storage.get_file("form.html").await.is_some());
    }

    #[tokio::test]
    async fn test_engine_writes_nothing_on_failure() {
        let storage = MockStorage::new();
        let pipeline = FormPipeline::new(
            storage.clone(),
            MockConfig::new(SOURCE_URL),
            StaticFetcher("<html>no schema here</html>".to_string()),
        );
        let engine = ConversionEngine::new(pipeline);

        assert!(matches!(
            engine.run().await,
            Err(ConvertError::SchemaNotFound)
        ));
        assert!(storage.get_file("form.html").await.is_none());
    }
}
