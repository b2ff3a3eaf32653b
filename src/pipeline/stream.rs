// src/pipeline/stream.rs
use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::time::Instant;

use crate::error::ProcessingError;
use crate::pipeline::collect::UniqueSorted;
use crate::pipeline::config::PipelineConfig;
use crate::pipeline::context::{
    LineContext, PipelineContext, PipelineOutput, ProcessResult, ProcessingStats,
};
use crate::pipeline::processors::{PrefixFilterProcessor, TrimProcessor, TruncateProcessor};

/// Main trait for line processing steps
pub trait RecordProcessor: Send + Sync {
    fn process(&mut self, line: &str, ctx: &LineContext) -> ProcessResult;
    fn name(&self) -> &str;
    fn reset(&mut self) {} // Called between files/streams
}

/// Main pipeline orchestrator
pub struct StreamPipeline {
    processors: Vec<Box<dyn RecordProcessor>>,
    context: PipelineContext,
    config: PipelineConfig,
    stats: ProcessingStats,
}

impl StreamPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        StreamPipeline {
            processors: Vec::new(),
            context: PipelineContext::new(),
            config,
            stats: ProcessingStats::default(),
        }
    }

    /// Build the standard trim, prefix filter, truncate chain
    pub fn from_config(config: PipelineConfig) -> Self {
        let prefixes = config.prefixes.clone();
        let delimiter = config.delimiter;

        let mut pipeline = StreamPipeline::new(config);
        pipeline.add_processor(Box::new(TrimProcessor::new()));
        pipeline.add_processor(Box::new(PrefixFilterProcessor::new(prefixes)));
        pipeline.add_processor(Box::new(TruncateProcessor::new(delimiter)));
        pipeline
    }

    pub fn add_processor(&mut self, processor: Box<dyn RecordProcessor>) {
        self.processors.push(processor);
    }

    pub fn processor_names(&self) -> Vec<&str> {
        self.processors.iter().map(|p| p.name()).collect()
    }

    /// Open a file, read it completely, and run the pipeline over its lines.
    /// The file is closed before any filtering starts.
    pub fn process_file(&mut self, path: &Path) -> Result<PipelineOutput, ProcessingError> {
        let lines = {
            let file = File::open(path).map_err(|e| ProcessingError::unavailable(path, e))?;
            let reader = BufReader::with_capacity(self.config.buffer_size, file);
            read_all_lines(reader, path)?
        };

        let name = path.display().to_string();
        Ok(self.process_lines(lines, Some(&name)))
    }

    /// Read every line from a stream, then run the pipeline over them
    pub fn process_stream<R: BufRead>(
        &mut self,
        input: R,
        filename: Option<&str>,
    ) -> Result<PipelineOutput, ProcessingError> {
        let lines = read_all_lines(input, Path::new(filename.unwrap_or("<stdin>")))?;
        Ok(self.process_lines(lines, filename))
    }

    /// Run the pipeline over lines that are already in memory
    pub fn process_lines<I>(&mut self, lines: I, filename: Option<&str>) -> PipelineOutput
    where
        I: IntoIterator<Item = String>,
    {
        let start_time = Instant::now();

        // Update context for new input
        self.context.file_name = filename.map(|s| s.to_string());
        self.context.line_number = 0;

        let mut file_stats = ProcessingStats::default();
        let mut collected = UniqueSorted::new();

        // Reset processor state between inputs
        for processor in &mut self.processors {
            processor.reset();
        }

        for line in lines {
            self.context.line_number += 1;
            file_stats.lines_read += 1;

            match self.process_line(&line) {
                ProcessResult::Transform(value) => {
                    file_stats.lines_kept += 1;
                    if !collected.insert(value) {
                        file_stats.duplicates += 1;
                    }
                }
                ProcessResult::Skip => {
                    file_stats.lines_skipped += 1;
                }
            }
        }

        let values = collected.into_sorted();
        file_stats.values_output = values.len();
        file_stats.processing_time = start_time.elapsed();

        if self.config.debug {
            eprintln!(
                "linesift: {} lines read, {} kept, {} skipped, {} duplicates, {} values in {:?}",
                file_stats.lines_read,
                file_stats.lines_kept,
                file_stats.lines_skipped,
                file_stats.duplicates,
                file_stats.values_output,
                file_stats.processing_time
            );
        }

        self.stats.merge(&file_stats);

        PipelineOutput {
            values,
            stats: file_stats,
        }
    }

    fn process_line(&mut self, line: &str) -> ProcessResult {
        let mut current_line = line.to_string();

        let ctx = LineContext {
            line_number: self.context.line_number,
            file_name: self.context.file_name.as_deref(),
            debug: self.config.debug,
        };

        // Process through all processors in sequence
        for processor in &mut self.processors {
            match processor.process(&current_line, &ctx) {
                ProcessResult::Transform(new_line) => {
                    current_line = new_line;
                }
                ProcessResult::Skip => {
                    // If any processor skips, the whole line is skipped
                    return ProcessResult::Skip;
                }
            }
        }

        ProcessResult::Transform(current_line)
    }

    /// Get current accumulated stats
    pub fn get_stats(&self) -> &ProcessingStats {
        &self.stats
    }

    /// Completely reset everything (for reusing pipeline)
    pub fn hard_reset(&mut self) {
        self.context = PipelineContext::new();

        for processor in &mut self.processors {
            processor.reset();
        }

        self.stats = ProcessingStats::default();
    }
}

/// Materialise every line of the input. Any read error, including invalid
/// UTF-8, aborts the whole read.
fn read_all_lines<R: BufRead>(mut input: R, source: &Path) -> Result<Vec<String>, ProcessingError> {
    let mut content = String::new();
    input
        .read_to_string(&mut content)
        .map_err(|e| ProcessingError::unavailable(source, e))?;
    Ok(split_records(&content))
}

/// Split text into records. `\n`, `\r\n` and a lone `\r` all end a record
/// and are not part of it. A trailing terminator does not start a new record.
pub fn split_records(text: &str) -> Vec<String> {
    let mut records = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        match rest.find(|c: char| c == '\n' || c == '\r') {
            Some(end) => {
                records.push(rest[..end].to_string());
                let terminator = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + terminator..];
            }
            None => {
                records.push(rest.to_string());
                break;
            }
        }
    }

    records
}
