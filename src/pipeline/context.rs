use std::time::Duration;

/// Context passed to each processor for a line
pub struct LineContext<'a> {
    pub line_number: usize,
    pub file_name: Option<&'a str>,
    pub debug: bool,
}

/// Result of processing a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessResult {
    /// Pass the (possibly rewritten) line on to the next step
    Transform(String),
    /// Drop this line (filter out)
    Skip,
}

/// Runtime statistics
#[derive(Debug, Default, Clone)]
pub struct ProcessingStats {
    pub lines_read: usize,
    pub lines_kept: usize,
    pub lines_skipped: usize,
    pub duplicates: usize,
    pub values_output: usize,
    pub processing_time: Duration,
}

impl ProcessingStats {
    pub fn merge(&mut self, other: &ProcessingStats) {
        self.lines_read += other.lines_read;
        self.lines_kept += other.lines_kept;
        self.lines_skipped += other.lines_skipped;
        self.duplicates += other.duplicates;
        self.values_output += other.values_output;
        self.processing_time += other.processing_time;
    }
}

/// Final result of one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    /// Unique values in ascending order
    pub values: Vec<String>,
    pub stats: ProcessingStats,
}

/// Shared context across all processors
#[derive(Debug, Default)]
pub struct PipelineContext {
    pub line_number: usize,
    pub file_name: Option<String>,
}

impl PipelineContext {
    pub fn new() -> Self {
        Self::default()
    }
}
