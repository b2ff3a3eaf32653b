// tests/basic_pipeline_tests.rs
use std::io::{Cursor, Write};
use std::path::Path;
use linesift::{PipelineConfig, ProcessingError, StreamPipeline};
use tempfile::NamedTempFile;

fn run(input: &str) -> Vec<String> {
    let mut pipeline = StreamPipeline::from_config(PipelineConfig::default());
    pipeline
        .process_stream(Cursor::new(input.to_string()), Some("test.txt"))
        .unwrap()
        .values
}

#[test]
fn test_reference_scenario() {
    let output = run("core.module(arg)\nextra.thing\nextensions.plugin(x,y)\ncore.module(other)\n");
    assert_eq!(output, vec!["core.module", "extensions.plugin"]);
}

#[test]
fn test_line_without_delimiter_kept_whole() {
    assert_eq!(run("core.bare\n"), vec!["core.bare"]);
}

#[test]
fn test_padded_line_matches_like_unpadded() {
    assert_eq!(run("  core.x(1)  \n"), run("core.x(1)\n"));
    assert_eq!(run("\tcore.x(1)\r\n"), vec!["core.x"]);
}

#[test]
fn test_every_newline_style_ends_a_record() {
    assert_eq!(
        run("core.a\rcore.b(x)\n\u{1f}core.c\u{1f}\n"),
        vec!["core.a", "core.b", "core.c"]
    );
    assert_eq!(run("core.a(1)\r\r\ncore.d\r"), vec!["core.a", "core.d"]);
}

#[test]
fn test_empty_input() {
    assert!(run("").is_empty());
    assert!(run("\n\n   \n").is_empty());
}

#[test]
fn test_stats() {
    let mut pipeline = StreamPipeline::from_config(PipelineConfig::default());
    let output = pipeline
        .process_stream(
            Cursor::new("core.b(1)\n\nother\ncore.b(2)\nextensions.a\n"),
            None,
        )
        .unwrap();

    assert_eq!(output.values, vec!["core.b", "extensions.a"]);
    assert_eq!(output.stats.lines_read, 5);
    assert_eq!(output.stats.lines_kept, 3);
    assert_eq!(output.stats.lines_skipped, 2);
    assert_eq!(output.stats.duplicates, 1);
    assert_eq!(output.stats.values_output, 2);
}

#[test]
fn test_prefix_is_not_a_substring_match() {
    // Prefix text appearing later in the line does not count
    assert!(run("my.core.thing\n  x core(1)\n").is_empty());
}

#[test]
fn test_custom_prefixes_and_delimiter() {
    let config = PipelineConfig {
        prefixes: vec!["GET ".to_string(), "POST ".to_string()],
        delimiter: '?',
        ..PipelineConfig::default()
    };
    let mut pipeline = StreamPipeline::from_config(config);
    let output = pipeline
        .process_stream(
            Cursor::new("GET /a?x=1\nPOST /b\nget /c\nGET /a?y=2\nPUT /d\n"),
            None,
        )
        .unwrap();

    assert_eq!(output.values, vec!["GET /a", "POST /b"]);
}

#[test]
fn test_truncation_can_collapse_to_prefix() {
    let config = PipelineConfig {
        delimiter: '.',
        ..PipelineConfig::default()
    };
    let mut pipeline = StreamPipeline::from_config(config);
    let output = pipeline
        .process_stream(Cursor::new("core.a\ncore.b\nextensions.c\n"), None)
        .unwrap();

    assert_eq!(output.values, vec!["core", "extensions"]);
}

#[test]
fn test_process_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "extensions.z(1)").unwrap();
    writeln!(file, "core.a").unwrap();
    write!(file, "core.m(no newline at end)").unwrap();
    file.flush().unwrap();

    let mut pipeline = StreamPipeline::from_config(PipelineConfig::default());
    let output = pipeline.process_file(file.path()).unwrap();

    assert_eq!(output.values, vec!["core.a", "core.m", "extensions.z"]);
}

#[test]
fn test_missing_file_is_unavailable() {
    let mut pipeline = StreamPipeline::from_config(PipelineConfig::default());
    let err = pipeline
        .process_file(Path::new("/nonexistent/dir/output.txt"))
        .unwrap_err();

    match err {
        ProcessingError::ResourceUnavailable { path, source } => {
            assert_eq!(path, Path::new("/nonexistent/dir/output.txt"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {}", other),
    }
    assert_eq!(pipeline.get_stats().lines_read, 0);
}

#[test]
fn test_directory_is_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let mut pipeline = StreamPipeline::from_config(PipelineConfig::default());
    let err = pipeline.process_file(dir.path()).unwrap_err();
    assert!(matches!(err, ProcessingError::ResourceUnavailable { .. }));
}

#[test]
fn test_sift_matches_pipeline() {
    let input = "  core.b(1)\rextensions.a\r\n\u{1f}core.b\nnope(1)\n";
    let prefixes = PipelineConfig::default().prefixes;
    assert_eq!(
        linesift::sift(linesift::split_records(input), &prefixes, '('),
        run(input)
    );
}
