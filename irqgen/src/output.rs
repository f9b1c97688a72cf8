// Licensed under the Apache-2.0 license

//! Generated artifacts and how they reach the filesystem.
//!
//! Generation itself is pure: each pass turns an
//! [`IrqDescriptor`](crate::IrqDescriptor) into lines of text. A
//! [`GeneratedArtifact`] pairs those lines with their destination and is the
//! only place that writes.

use log::info;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{IrqGenError, IrqGenResult};

/// Which of the three outputs an artifact is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    NvicHeader,
    CmsisHeader,
    VectorFragment,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArtifactKind::NvicHeader => "NVIC header",
            ArtifactKind::CmsisHeader => "CMSIS header",
            ArtifactKind::VectorFragment => "vector fragment",
        };
        f.write_str(name)
    }
}

/// A single output file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub lines: Vec<String>,
}

impl GeneratedArtifact {
    pub fn new(kind: ArtifactKind, path: impl Into<PathBuf>, lines: Vec<String>) -> Self {
        Self {
            kind,
            path: path.into(),
            lines,
        }
    }

    /// File contents: every line terminated by `\n`.
    pub fn contents(&self) -> String {
        let mut contents = String::with_capacity(self.lines.iter().map(|l| l.len() + 1).sum());
        for line in &self.lines {
            contents.push_str(line);
            contents.push('\n');
        }
        contents
    }

    /// Writes the artifact, creating missing parent directories and replacing
    /// any previous contents.
    pub fn write(&self) -> IrqGenResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| IrqGenError::io(parent, e))?;
        }
        let contents = self.contents();
        fs::write(&self.path, &contents).map_err(|e| IrqGenError::io(&self.path, e))?;
        info!(
            "Generated {} {} ({} bytes)",
            self.kind,
            self.path.display(),
            contents.len()
        );
        Ok(())
    }

    /// Returns true if the file on disk already holds exactly these contents.
    /// A missing file is not current.
    pub fn is_current(&self) -> IrqGenResult<bool> {
        match fs::read(&self.path) {
            Ok(existing) => Ok(existing == self.contents().as_bytes()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(IrqGenError::io(&self.path, e)),
        }
    }
}
