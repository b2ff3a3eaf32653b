// src/lib.rs
pub mod error;
pub mod output_format;
pub mod pipeline;

pub use error::*;
pub use pipeline::*;

pub use output_format::{OutputFormat, OutputFormatter};
pub use pipeline::collect::UniqueSorted;
pub use pipeline::config::{FileConfig, PipelineConfig};
pub use pipeline::context::{LineContext, PipelineOutput, ProcessResult, ProcessingStats};
pub use pipeline::processors::{normalize, PrefixFilterProcessor, TrimProcessor, TruncateProcessor};
pub use pipeline::stream::{split_records, RecordProcessor, StreamPipeline};
