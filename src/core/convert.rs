use crate::core::assembler::assemble_form;
use crate::core::extractor::extract_questions;
use crate::core::formatter::format_html;
use crate::core::markup::to_markup;
use crate::core::renderer::render_field;
use crate::domain::model::{ConversionOutput, QuestionRecord};
use crate::domain::ports::PageFetcher;
use crate::utils::error::Result;
use crate::utils::validation::validate_form_url;

/// 驗證網址、抓取頁面並轉換。網址不合法時不會發出任何請求
pub async fn convert<F: PageFetcher + ?Sized>(
    fetcher: &F,
    source_url: &str,
) -> Result<ConversionOutput> {
    let questions = fetch_questions(fetcher, source_url).await?;
    Ok(build_output(source_url, &questions))
}

/// validate → fetch → extract，`convert` 與 pipeline 的 extract 階段共用
pub async fn fetch_questions<F: PageFetcher + ?Sized>(
    fetcher: &F,
    source_url: &str,
) -> Result<Vec<QuestionRecord>> {
    validate_form_url(source_url)?;

    tracing::debug!("Fetching form page: {}", source_url);
    let html = fetcher.fetch_page(source_url).await?;
    tracing::debug!("Fetched {} bytes", html.len());

    extract_questions(&html)
}

/// Same as [`convert`] for a page that has already been fetched.
pub fn convert_html(source_url: &str, html: &str) -> Result<ConversionOutput> {
    validate_form_url(source_url)?;
    let questions = extract_questions(html)?;
    Ok(build_output(source_url, &questions))
}

pub fn build_output(source_url: &str, questions: &[QuestionRecord]) -> ConversionOutput {
    let fields = questions.iter().map(render_field).collect();
    let preview = assemble_form(source_url, fields);
    let html_source = format_html(&to_markup(&preview));

    ConversionOutput {
        preview,
        html_source,
    }
}
