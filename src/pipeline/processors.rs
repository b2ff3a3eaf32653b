// src/pipeline/processors.rs
use crate::pipeline::context::{LineContext, ProcessResult};
use crate::pipeline::stream::RecordProcessor;

/// Whitespace removed by [`normalize`]: Unicode whitespace plus the
/// information separators U+001C..U+001F.
fn is_strip_whitespace(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Strip whitespace from both ends of a line
pub fn normalize(line: &str) -> &str {
    line.trim_matches(is_strip_whitespace)
}

/// Strips whitespace from both ends of every line
pub struct TrimProcessor {
    name: String,
}

impl TrimProcessor {
    pub fn new() -> Self {
        TrimProcessor {
            name: "trim".to_string(),
        }
    }
}

impl Default for TrimProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordProcessor for TrimProcessor {
    fn process(&mut self, line: &str, _ctx: &LineContext) -> ProcessResult {
        ProcessResult::Transform(normalize(line).to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Keeps only lines that start with one of the accepted prefixes
pub struct PrefixFilterProcessor {
    prefixes: Vec<String>,
    name: String,
}

impl PrefixFilterProcessor {
    pub fn new(prefixes: Vec<String>) -> Self {
        PrefixFilterProcessor {
            prefixes,
            name: "prefix_filter".to_string(),
        }
    }

    /// Case-sensitive starts-with test against every prefix
    pub fn matches(&self, line: &str) -> bool {
        self.prefixes.iter().any(|p| line.starts_with(p.as_str()))
    }
}

impl RecordProcessor for PrefixFilterProcessor {
    fn process(&mut self, line: &str, ctx: &LineContext) -> ProcessResult {
        if self.matches(line) {
            ProcessResult::Transform(line.to_string())
        } else {
            if ctx.debug && !line.is_empty() {
                eprintln!(
                    "linesift: {}:{}: no accepted prefix",
                    ctx.file_name.unwrap_or("<stdin>"),
                    ctx.line_number
                );
            }
            ProcessResult::Skip
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Cuts each line at the first occurrence of the delimiter
pub struct TruncateProcessor {
    delimiter: char,
    name: String,
}

impl TruncateProcessor {
    pub fn new(delimiter: char) -> Self {
        TruncateProcessor {
            delimiter,
            name: "truncate".to_string(),
        }
    }

    pub fn truncate<'a>(&self, line: &'a str) -> &'a str {
        match line.split_once(self.delimiter) {
            Some((head, _)) => head,
            None => line,
        }
    }
}

impl RecordProcessor for TruncateProcessor {
    fn process(&mut self, line: &str, _ctx: &LineContext) -> ProcessResult {
        ProcessResult::Transform(self.truncate(line).to_string())
    }

    fn name(&self) -> &str {
        &self.name
    }
}
