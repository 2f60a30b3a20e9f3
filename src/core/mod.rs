pub mod assembler;
pub mod convert;
pub mod engine;
pub mod extractor;
pub mod formatter;
pub mod markup;
pub mod pipeline;
pub mod renderer;

pub use crate::domain::model::{
    ConversionOutput, ConversionReport, FieldNode, FormDocument, QuestionRecord,
};
pub use crate::domain::ports::{ConfigProvider, PageFetcher, Pipeline, Storage};
pub use crate::utils::error::Result;
