//! Page fetching over HTTP.
//!
//! Either GETs the form page directly, or asks a `form-proxy` instance for
//! it via `GET <proxy>/fetch-form?url=<encoded>`. No retries and no timeout
//! beyond reqwest's defaults.

use crate::core::PageFetcher;
use crate::utils::error::{ConvertError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

pub const PROXY_ROUTE: &str = "fetch-form";

#[derive(Clone)]
pub struct HttpFetcher {
    client: Client,
    proxy_endpoint: Option<String>,
}

impl HttpFetcher {
    pub fn new(proxy_endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            proxy_endpoint,
        }
    }

    pub fn direct() -> Self {
        Self::new(None)
    }

    pub fn via_proxy(endpoint: impl Into<String>) -> Self {
        Self::new(Some(endpoint.into()))
    }

    /// 實際要請求的網址：直接抓取時即來源網址，經由代理時為代理路徑
    pub fn request_url(&self, source_url: &str) -> Result<String> {
        let Some(endpoint) = &self.proxy_endpoint else {
            return Ok(source_url.to_string());
        };

        let mut url = Url::parse(endpoint).map_err(|e| ConvertError::InvalidConfigValueError {
            field: "proxy".to_string(),
            value: endpoint.clone(),
            reason: format!("Invalid URL format: {}", e),
        })?;

        url.path_segments_mut()
            .map_err(|_| ConvertError::InvalidConfigValueError {
                field: "proxy".to_string(),
                value: endpoint.clone(),
                reason: "URL cannot be used as a base".to_string(),
            })?
            .pop_if_empty()
            .push(PROXY_ROUTE);
        url.query_pairs_mut().clear().append_pair("url", source_url);

        Ok(url.to_string())
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::direct()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let request_url = self.request_url(url)?;
        tracing::debug!("GET {}", request_url);

        let response = self.client.get(&request_url).send().await?;
        let status = response.status();
        tracing::debug!("Response status: {}", status);

        if !status.is_success() {
            return Err(ConvertError::FetchFailure {
                message: format!("{} returned HTTP {}", request_url, status),
            });
        }

        Ok(response.text().await?)
    }
}
