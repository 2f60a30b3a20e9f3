pub mod toml_config;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_name, validate_path, validate_url, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};
#[cfg(feature = "cli")]
use toml_config::{DEFAULT_OUTPUT_FILENAME, DEFAULT_OUTPUT_PATH};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "form-replica")]
#[command(about = "Rebuild a public Google Form as a standalone HTML form")]
pub struct CliConfig {
    /// Public form URL, e.g. https://docs.google.com/forms/d/e/<id>/viewform
    pub url: Option<String>,

    /// Load settings from a TOML file; command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fetch through a form-proxy instance, e.g. http://localhost:3000
    #[arg(long)]
    pub proxy: Option<String>,

    /// Output directory [default: ./output]
    #[arg(long)]
    pub output_path: Option<String>,

    /// Output file name [default: form.html]
    #[arg(long)]
    pub filename: Option<String>,

    #[arg(long, help = "Print the HTML to stdout instead of writing a file")]
    pub stdout: bool,

    #[arg(long, help = "Print the form preview as JSON")]
    pub preview_json: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列參數覆蓋檔案中的設定
    pub fn merge_into(&self, mut file: TomlConfig) -> TomlConfig {
        if let Some(url) = &self.url {
            file.source.url = Some(url.clone());
        }
        if let Some(proxy) = &self.proxy {
            file.source.proxy = Some(proxy.clone());
        }
        if let Some(path) = &self.output_path {
            file.output.path = Some(path.clone());
        }
        if let Some(filename) = &self.filename {
            file.output.filename = Some(filename.clone());
        }
        file
    }
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source_url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    fn proxy_endpoint(&self) -> Option<&str> {
        self.proxy.as_deref()
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_filename(&self) -> &str {
        self.filename.as_deref().unwrap_or(DEFAULT_OUTPUT_FILENAME)
    }
}

// 來源網址由轉換流程本身檢查（InvalidUrl），這裡只驗證其餘設定
#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(proxy) = &self.proxy {
            validate_url("--proxy", proxy)?;
        }
        validate_path("--output-path", self.output_path())?;
        validate_file_name("--filename", self.output_filename())?;
        Ok(())
    }
}
