use crate::domain::model::{ConversionOutput, QuestionRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn source_url(&self) -> &str;
    fn proxy_endpoint(&self) -> Option<&str>;
    fn output_path(&self) -> &str;
    fn output_filename(&self) -> &str;
}

/// 取得表單頁面原始 HTML
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch_page(&self, url: &str) -> Result<String>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<QuestionRecord>>;
    async fn transform(&self, questions: Vec<QuestionRecord>) -> Result<ConversionOutput>;
    async fn load(&self, output: ConversionOutput) -> Result<String>;
}
