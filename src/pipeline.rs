pub mod collect;
pub mod config;
pub mod context;
pub mod processors;
pub mod stream;

use crate::pipeline::collect::UniqueSorted;
use crate::pipeline::processors::{normalize, PrefixFilterProcessor, TruncateProcessor};

/// Trim, filter, truncate, dedupe and sort in-memory lines without any I/O.
///
/// This is the same transformation [`stream::StreamPipeline::from_config`]
/// performs, minus the stats and processor plumbing.
pub fn sift<I, S>(lines: I, prefixes: &[String], delimiter: char) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let filter = PrefixFilterProcessor::new(prefixes.to_vec());
    let truncate = TruncateProcessor::new(delimiter);

    let mut collected = UniqueSorted::new();
    for line in lines {
        let normalized = normalize(line.as_ref());
        if filter.matches(normalized) {
            collected.insert(truncate.truncate(normalized).to_string());
        }
    }
    collected.into_sorted()
}
