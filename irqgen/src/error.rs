// Licensed under the Apache-2.0 license

use std::path::PathBuf;
use thiserror::Error;

use crate::output::ArtifactKind;

/// Reasons a descriptor is rejected.
#[derive(Error, Debug)]
pub enum DescriptorError {
    /// Not valid JSON, or valid JSON of the wrong shape
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error("top level must be a JSON object")]
    NotAnObject,
    /// The same interrupt appears twice (names compared case-insensitively)
    #[error("duplicate IRQ name `{name}` at index {index} (first seen at index {first})")]
    DuplicateIrq {
        name: String,
        index: usize,
        first: usize,
    },
    /// The name cannot be embedded in a C identifier
    #[error("IRQ name `{name}` at index {index} is not a valid C identifier fragment")]
    InvalidIrqName { name: String, index: usize },
}

/// Errors that can occur while generating the interrupt table artifacts
#[derive(Error, Debug)]
pub enum IrqGenError {
    #[error("malformed IRQ descriptor {source_name}")]
    MalformedDescriptor {
        source_name: String,
        #[source]
        reason: DescriptorError,
    },
    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is out of date; regenerate it from the IRQ descriptor", path.display())]
    Stale { path: PathBuf },
    /// An output location was left empty
    #[error("no path given for the {0}")]
    MissingPath(ArtifactKind),
}

impl IrqGenError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IrqGenError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn malformed(source_name: impl Into<String>, reason: DescriptorError) -> Self {
        IrqGenError::MalformedDescriptor {
            source_name: source_name.into(),
            reason,
        }
    }
}

/// Result type for interrupt table generation
pub type IrqGenResult<T> = std::result::Result<T, IrqGenError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;

    /// Renders the error with its cause chain, one `: ` per level.
    fn chain(err: &dyn std::error::Error) -> String {
        let mut message = err.to_string();
        let mut cause = err.source();
        while let Some(e) = cause {
            message.push_str(&format!(": {e}"));
            cause = e.source();
        }
        message
    }

    #[test]
    fn test_json_cause_reported_once() {
        let json = serde_json::from_str::<Vec<String>>("5").unwrap_err();
        let json_message = json.to_string();
        let err = IrqGenError::malformed("irq.json", DescriptorError::from(json));
        let message = chain(&err);
        assert_eq!(message.matches(&json_message).count(), 1, "{message}");
        assert!(
            message.starts_with("malformed IRQ descriptor irq.json: "),
            "{message}"
        );
    }

    #[test]
    fn test_io_cause_reported_once() {
        let io = std::io::Error::new(ErrorKind::NotFound, "No such file or directory");
        let err = IrqGenError::io("missing.json", io);
        let message = chain(&err);
        assert_eq!(
            message,
            "I/O error on missing.json: No such file or directory"
        );
    }

    #[test]
    fn test_duplicate_reported_once() {
        let err = IrqGenError::malformed(
            "irq.json",
            DescriptorError::DuplicateIrq {
                name: "ADC".to_string(),
                index: 1,
                first: 0,
            },
        );
        let message = chain(&err);
        assert_eq!(
            message.matches("duplicate IRQ name `ADC`").count(),
            1,
            "{message}"
        );
    }
}

