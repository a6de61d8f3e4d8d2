use cipher_core::PlayfairMatrix;
use cipher_core::format::group_letters;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt;

/// Which direction a cipher runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Operation {
    Encrypt,
    Decrypt,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Encrypt => write!(f, "encryption"),
            Self::Decrypt => write!(f, "decryption"),
        }
    }
}

/// The result of one command, printed as labelled lines or as JSON.
#[derive(Serialize, Debug)]
pub(crate) struct Report {
    cipher: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    operation: Option<Operation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    input: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    shift: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    matrix: Option<PlayfairMatrix>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prepared: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    formatted: Option<String>,
}

impl Report {
    pub(crate) fn new(
        cipher: &'static str,
        operation: Operation,
        input: String,
        output: String,
    ) -> Self {
        Self {
            cipher,
            operation: Some(operation),
            input: Some(input),
            key: None,
            shift: None,
            matrix: None,
            prepared: None,
            output: Some(output),
            formatted: None,
        }
    }

    pub(crate) fn matrix_only(key: String, matrix: PlayfairMatrix) -> Self {
        Self {
            cipher: "playfair",
            operation: None,
            input: None,
            key: Some(key),
            shift: None,
            matrix: Some(matrix),
            prepared: None,
            output: None,
            formatted: None,
        }
    }

    pub(crate) fn with_key(mut self, key: String) -> Self {
        self.key = Some(key);
        self
    }

    pub(crate) fn with_shift(mut self, shift: i64) -> Self {
        self.shift = Some(shift);
        self
    }

    pub(crate) fn with_prepared(mut self, prepared: String) -> Self {
        self.prepared = Some(prepared);
        self
    }

    pub(crate) fn with_matrix(mut self, matrix: PlayfairMatrix) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Adds the output split into groups of `size` letters.
    pub(crate) fn grouped(mut self, size: usize) -> Self {
        self.formatted = self.output.as_deref().map(|out| group_letters(out, size));
        self
    }

    /// Prints the report as labelled lines on stdout.
    pub(crate) fn print(&self) {
        if let Some(matrix) = &self.matrix {
            println!("Playfair Key Matrix:");
            println!("{matrix}");
            println!();
        }
        if let Some(operation) = self.operation {
            let title = match operation {
                Operation::Encrypt => "Encryption Result:",
                Operation::Decrypt => "Decryption Result:",
            };
            println!("{title}");
        }
        if let Some(input) = &self.input {
            println!("Input: {input}");
        }
        if let Some(shift) = self.shift {
            println!("Shift: {shift}");
        }
        if let Some(key) = &self.key {
            println!("Key: {key}");
        }
        if let Some(prepared) = &self.prepared {
            println!("Prepared: {prepared}");
        }
        if let Some(output) = &self.output {
            println!("Output: {output}");
        }
        if let Some(formatted) = &self.formatted {
            println!("Formatted: {formatted}");
        }
    }
}
