use crate::error::InputError;
use std::fs;
use std::io::{self, ErrorKind, Read};
use std::path::Path;

/// One non-blank input line, split into name tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub line: usize, // 1-indexed
    pub tokens: Vec<String>,
}

/// Read a whole name list. `-` reads standard input.
pub fn read_source(path: &Path) -> Result<String, InputError> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .map_err(|source| InputError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        return Ok(content);
    }

    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound {
            path: path.to_path_buf(),
        },
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Split content into records, skipping lines without any tokens
pub fn parse_records(content: &str) -> Vec<Record> {
    split_lines(content)
        .into_iter()
        .enumerate()
        .filter_map(|(idx, line)| {
            let tokens = tokenize(line);
            if tokens.is_empty() {
                None
            } else {
                Some(Record {
                    line: idx + 1,
                    tokens,
                })
            }
        })
        .collect()
}

/// Lines ended by `\n`, `\r\n` or a lone `\r`
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find(&['\n', '\r'][..]) {
        lines.push(&rest[..pos]);
        let break_len = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[pos + break_len..];
    }
    if !rest.is_empty() {
        lines.push(rest);
    }

    lines
}

pub fn tokenize(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_string).collect()
}
