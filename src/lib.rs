pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::TomlConfig;

pub use crate::adapters::{http::HttpFetcher, storage::LocalStorage};
pub use crate::core::convert::{convert, convert_html};
pub use crate::core::{engine::ConversionEngine, pipeline::FormPipeline};
pub use crate::domain::model::{ConversionOutput, FieldNode, FormDocument, QuestionKind, QuestionRecord};
pub use crate::utils::error::{ConvertError, Result};
