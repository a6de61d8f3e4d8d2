use crate::TextSource;
use cipher_core::CipherError;
use log::debug;
use std::fs;
use std::io::{self, Read};
use thiserror::Error;

/// Everything that can stop a command before it prints a result.
#[derive(Error, Debug)]
pub(crate) enum CliError {
    #[error("Text cannot be empty")]
    EmptyText,

    #[error("Key cannot be empty")]
    EmptyKey,

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Cipher(#[from] CipherError),
}

/// Collects the text to process from the argument, the `--input` file or stdin, trimmed.
pub(crate) fn read_text(source: &TextSource) -> Result<String, CliError> {
    let raw = if let Some(text) = &source.text {
        text.clone()
    } else if let Some(path) = &source.input {
        debug!("Reading text from '{}'", path.display());
        fs::read_to_string(path)?
    } else {
        debug!("Reading text from standard input");
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    };

    let text = raw.trim();
    if text.is_empty() {
        return Err(CliError::EmptyText);
    }
    Ok(text.to_string())
}

/// Trims a key argument. Validation of its letters is left to the cipher.
pub(crate) fn read_key(key: &str) -> Result<String, CliError> {
    let key = key.trim();
    if key.is_empty() {
        return Err(CliError::EmptyKey);
    }
    Ok(key.to_string())
}
