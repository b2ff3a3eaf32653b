use crate::error::ProcessingError;
use serde::Deserialize;
use std::fmt::Write as _;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    #[value(name = "list", help = "Single bracketed line: ['a', 'b']")]
    List,
    #[value(name = "lines", help = "One value per line")]
    Lines,
    #[value(name = "json", help = "JSON array")]
    Json,
    #[value(name = "yaml", help = "YAML sequence")]
    Yaml,
}

pub struct OutputFormatter {
    format: OutputFormat,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat) -> Self {
        OutputFormatter { format }
    }

    pub fn write<W: Write>(&self, values: &[String], output: &mut W) -> Result<(), ProcessingError> {
        match self.format {
            OutputFormat::List => {
                writeln!(output, "{}", format_list(values))?;
            }
            OutputFormat::Lines => {
                for value in values {
                    writeln!(output, "{}", value)?;
                }
            }
            OutputFormat::Json => {
                let json = serde_json::to_string(values).map_err(std::io::Error::other)?;
                writeln!(output, "{}", json)?;
            }
            OutputFormat::Yaml => {
                let yaml = serde_yaml::to_string(values).map_err(std::io::Error::other)?;
                write!(output, "{}", yaml)?;
            }
        }
        Ok(())
    }
}

/// Render values as `['a', 'b']`.
///
/// Each value is quoted with `'`, or with `"` when it contains a `'` but no
/// `"`. Backslashes, the chosen quote and non-printable characters are
/// escaped.
pub fn format_list(values: &[String]) -> String {
    let mut out = String::from("[");
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        push_quoted(&mut out, value);
    }
    out.push(']');
    out
}

fn push_quoted(out: &mut String, value: &str) {
    let quote = if value.contains('\'') && !value.contains('"') {
        '"'
    } else {
        '\''
    };

    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if is_printable(c) => out.push(c),
            c => {
                let code = c as u32;
                let _ = if code < 0x100 {
                    write!(out, "\\x{:02x}", code)
                } else if code < 0x10000 {
                    write!(out, "\\u{:04x}", code)
                } else {
                    write!(out, "\\U{:08x}", code)
                };
            }
        }
    }
    out.push(quote);
}

/// Control, separator (other than space), format, private-use and
/// noncharacter code points are not printable.
fn is_printable(c: char) -> bool {
    if c == ' ' {
        return true;
    }
    if c.is_control() || c.is_whitespace() {
        return false;
    }
    let code = c as u32;
    let format = matches!(
        c,
        '\u{ad}'
            | '\u{600}'..='\u{605}'
            | '\u{61c}'
            | '\u{6dd}'
            | '\u{70f}'
            | '\u{180e}'
            | '\u{200b}'..='\u{200f}'
            | '\u{202a}'..='\u{202e}'
            | '\u{2060}'..='\u{2064}'
            | '\u{2066}'..='\u{206f}'
            | '\u{feff}'
            | '\u{fff9}'..='\u{fffb}'
            | '\u{e0001}'
            | '\u{e0020}'..='\u{e007f}'
    );
    let private_use = matches!(c, '\u{e000}'..='\u{f8ff}' | '\u{f0000}'..='\u{10ffff}');
    let noncharacter = (0xfdd0..=0xfdef).contains(&code) || code & 0xfffe == 0xfffe;
    !(format || private_use || noncharacter)
}
