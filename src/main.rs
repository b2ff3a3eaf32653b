use clap::{ArgAction, Parser};
use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;

use linesift::pipeline::config::DEFAULT_INPUT;
use linesift::{
    FileConfig, OutputFormat, OutputFormatter, PipelineConfig, PipelineOutput, ProcessingError,
    StreamPipeline,
};

#[derive(Parser)]
#[command(name = "linesift")]
#[command(about = "Filter lines by prefix, cut them at a delimiter, and print the unique values sorted")]
#[command(version)]
struct Args {
    /// Input file ('-' for stdin) [default: output.txt]
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Accepted line prefix (repeatable, replaces the defaults)
    #[arg(short = 'p', long = "prefix", value_name = "PREFIX", action = ArgAction::Append)]
    prefixes: Vec<String>,

    /// Cut each line before the first occurrence of this character
    #[arg(short = 'd', long = "delimiter", value_name = "CHAR")]
    delimiter: Option<char>,

    /// YAML config file with input, prefixes, delimiter and format
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'F', long = "format", value_enum)]
    format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short = 'o', long = "output")]
    output_file: Option<PathBuf>,

    /// Buffer size for I/O
    #[arg(long, default_value = "65536")] // 64KB
    buffer_size: usize,

    /// Debug mode - show processing details on stderr
    #[arg(long)]
    debug: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("linesift: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let file_config = match &args.config_file {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };

    // Defaults, then config file, then command line
    let mut config = PipelineConfig {
        debug: args.debug,
        buffer_size: args.buffer_size,
        ..PipelineConfig::default()
    };
    file_config.apply_to(&mut config);
    if !args.prefixes.is_empty() {
        config.prefixes = args.prefixes.clone();
    }
    if let Some(delimiter) = args.delimiter {
        config.delimiter = delimiter;
    }
    config.validate()?;

    let input = args
        .input
        .clone()
        .or_else(|| file_config.input.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let format = args.format.or(file_config.format).unwrap_or_default();

    if config.debug {
        eprintln!(
            "linesift: prefixes={:?} delimiter={:?}",
            config.prefixes, config.delimiter
        );
    }

    let buffer_size = config.buffer_size;
    let mut pipeline = StreamPipeline::from_config(config);

    let result = if input.as_os_str() == "-" {
        if args.debug {
            eprintln!("linesift: reading from stdin");
        }
        let stdin = io::stdin();
        pipeline.process_stream(BufReader::with_capacity(buffer_size, stdin.lock()), None)?
    } else {
        if args.debug {
            eprintln!("linesift: reading from {}", input.display());
        }
        pipeline.process_file(&input)?
    };

    // Output is only opened once the whole input has been read
    let mut output: Box<dyn Write> = if let Some(output_path) = &args.output_file {
        let file = File::create(output_path).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create output file '{}': {}",
                output_path.display(),
                e
            )
        })?;
        Box::new(io::BufWriter::with_capacity(buffer_size, file))
    } else {
        Box::new(io::BufWriter::with_capacity(buffer_size, io::stdout()))
    };

    match write_result(&result, format, &mut output) {
        Err(ProcessingError::IoError(e)) if e.kind() == io::ErrorKind::BrokenPipe => {}
        other => other?,
    }

    if args.debug {
        let stats = pipeline.get_stats();
        eprintln!("linesift: final statistics:");
        eprintln!("  Lines read: {}", stats.lines_read);
        eprintln!("  Lines kept: {}", stats.lines_kept);
        eprintln!("  Lines skipped: {}", stats.lines_skipped);
        eprintln!("  Duplicates dropped: {}", stats.duplicates);
        eprintln!("  Values output: {}", stats.values_output);
        eprintln!("  Processing time: {:?}", stats.processing_time);
    }

    Ok(())
}

fn write_result<W: Write>(
    result: &PipelineOutput,
    format: OutputFormat,
    output: &mut W,
) -> Result<(), ProcessingError> {
    OutputFormatter::new(format).write(&result.values, output)?;
    output.flush()?;
    Ok(())
}
