//! Gathering builder input from the command line, a file, or stdin.

use std::io::{self, Read};
use std::path::Path;

use crate::error::PromptError;

/// Collect prompt input from the available sources.
///
/// Inline `text` and a body piped on stdin are joined with a blank line, so a
/// short instruction can precede a long report. `file` replaces stdin and
/// cannot be combined with it. Blank results are rejected.
pub fn read_input(
    text: Option<&str>,
    file: Option<&Path>,
    stdin: bool,
) -> Result<String, PromptError> {
    if file.is_some() && stdin {
        return Err(PromptError::invalid_input(
            "--file and --stdin cannot be used together",
        ));
    }

    let body = match file {
        Some(path) => Some(read_file(path)?),
        None if stdin => Some(read_stdin()?),
        None => None,
    };

    combine(text, body)
}

fn combine(text: Option<&str>, body: Option<String>) -> Result<String, PromptError> {
    let joined = match (text, body) {
        (Some(t), Some(b)) => format!("{t}\n\n{b}"),
        (Some(t), None) => t.to_string(),
        (None, Some(b)) => b,
        (None, None) => {
            return Err(PromptError::invalid_input(
                "provide the input inline, with --file, or with --stdin",
            ));
        }
    };
    if joined.trim().is_empty() {
        return Err(PromptError::invalid_input("input is empty"));
    }
    Ok(joined)
}

fn read_file(path: &Path) -> Result<String, PromptError> {
    std::fs::read_to_string(path).map_err(|source| PromptError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn read_stdin() -> Result<String, PromptError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(|source| PromptError::Io {
            path: "<stdin>".into(),
            source,
        })?;
    Ok(buf)
}
