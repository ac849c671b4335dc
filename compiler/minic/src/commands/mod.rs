//! Driver commands and their shared plumbing.

use std::io::{self, Read};

use minic_lexer::LexError;
use thiserror::Error;

mod lex;

pub use lex::{lex_file, parse_lex_options};

/// Path shown in messages when the source comes from stdin.
const STDIN_PATH: &str = "<stdin>";

/// Everything that can stop a driver command.
#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command line. The message already explains the expected form.
    #[error("{0}")]
    Usage(String),

    #[error("cannot read '{path}': {source}")]
    Read { path: String, source: io::Error },

    #[error("cannot write output: {0}")]
    Write(#[from] io::Error),

    /// An unexpected character under `--strict`.
    #[error(transparent)]
    Lex(#[from] LexError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage(_) => 2,
            CliError::Read { .. } | CliError::Write(_) | CliError::Lex(_) => 1,
        }
    }
}

/// Read a whole source file as raw bytes, or stdin when `path` is `-`.
fn read_source(path: &str) -> Result<Vec<u8>, CliError> {
    if path == "-" {
        let mut content = Vec::new();
        io::stdin()
            .read_to_end(&mut content)
            .map_err(|source| CliError::Read {
                path: STDIN_PATH.to_owned(),
                source,
            })?;
        return Ok(content);
    }

    std::fs::read(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn exit_codes() {
        assert_eq!(CliError::Usage("x".to_owned()).exit_code(), 2);
        let io = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(CliError::Write(io).exit_code(), 1);
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = read_source("/definitely/not/here.mc");
        match err {
            Err(CliError::Read { path, .. }) => assert_eq!(path, "/definitely/not/here.mc"),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn read_error_message_names_path() {
        let err = CliError::Read {
            path: "main.mc".to_owned(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "cannot read 'main.mc': denied");
    }
}
