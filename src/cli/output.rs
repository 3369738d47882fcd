use crate::{RecordResult, RunResult};
use colored::*;
use serde::Deserialize;
use std::fmt;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Write one record's mutations. Text is one mutation per line; JSON is one
/// object per record per line.
pub fn write_record<W: Write>(out: &mut W, result: &RecordResult, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => write_text(out, result),
        OutputFormat::Json => write_json(out, result),
    }
}

fn write_text<W: Write>(out: &mut W, result: &RecordResult) -> io::Result<()> {
    for mutation in &result.mutations {
        writeln!(out, "{}", mutation)?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, result: &RecordResult) -> io::Result<()> {
    serde_json::to_writer(&mut *out, result)?;
    writeln!(out)
}

/// Run summary on stderr, so it never mixes with the wordlist
pub fn print_summary(result: &RunResult, colored: bool) {
    let record_word = if result.record_count == 1 { "record" } else { "records" };
    let mutation_word = if result.mutation_count == 1 { "mutation" } else { "mutations" };

    if colored {
        eprintln!(
            "{} {} {} from {} {}",
            "✓".green().bold(),
            result.mutation_count.to_string().green().bold(),
            mutation_word,
            result.record_count,
            record_word
        );
    } else {
        eprintln!(
            "✓ {} {} from {} {}",
            result.mutation_count, mutation_word, result.record_count, record_word
        );
    }

    if result.skipped_count > 0 {
        let line_word = if result.skipped_count == 1 { "line" } else { "lines" };
        if colored {
            eprintln!(
                "{} {} {} skipped (too many tokens)",
                "!".yellow().bold(),
                result.skipped_count.to_string().yellow().bold(),
                line_word
            );
        } else {
            eprintln!(
                "! {} {} skipped (too many tokens)",
                result.skipped_count, line_word
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordResult {
        RecordResult {
            line: 3,
            tokens: vec!["Ann".to_string(), "Lee".to_string()],
            mutations: vec!["al".to_string(), "annlee".to_string()],
        }
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text));
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_write_text() {
        let mut buf = Vec::new();
        write_record(&mut buf, &sample(), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "al\nannlee\n");
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_record(&mut buf, &sample(), OutputFormat::Json).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));

        let value: serde_json::Value = serde_json::from_str(text.trim_end()).unwrap();
        assert_eq!(value["line"], 3);
        assert_eq!(value["tokens"][1], "Lee");
        assert_eq!(value["mutations"][0], "al");
    }
}
