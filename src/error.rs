use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while opening or reading a name list
#[derive(Debug, Error)]
pub enum InputError {
    #[error("File '{}' not found", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = InputError::NotFound {
            path: PathBuf::from("names.txt"),
        };
        assert_eq!(err.to_string(), "File 'names.txt' not found");
    }
}
