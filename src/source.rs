// File: ./src/source.rs
//! Where schedule lines come from.
//!
//! The parser only ever sees an ordered list of lines or a failure naming
//! the source and the cause. Reading files (or anything else) lives here.
use fs2::FileExt;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The schedule could not be supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{source_id}: {cause}")]
pub struct SourceFailure {
    pub source_id: String,
    pub cause: String,
}

impl SourceFailure {
    pub fn new(source_id: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            source_id: source_id.into(),
            cause: cause.into(),
        }
    }

    pub fn empty(source_id: impl Into<String>) -> Self {
        Self::new(source_id, ".csv empty")
    }
}

/// Lines read from a named source, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLines {
    pub source_id: String,
    pub lines: Vec<String>,
}

pub trait LineSource {
    /// Identifier shown to the user when loading fails.
    fn id(&self) -> String;
    fn read_lines(&self) -> Result<SourceLines, SourceFailure>;
}

/// A spreadsheet export on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_text(&self) -> std::io::Result<String> {
        let mut file = fs::File::open(&self.path)?;
        // Readers share the file; whoever replaces the export takes it exclusively.
        file.lock_shared()?;
        let mut bytes = Vec::new();
        let read = file.read_to_end(&mut bytes);
        file.unlock()?;
        read?;
        // Corrupt bytes become replacement characters and fail at row level.
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

impl LineSource for FileSource {
    fn id(&self) -> String {
        self.path.display().to_string()
    }

    fn read_lines(&self) -> Result<SourceLines, SourceFailure> {
        let text = self
            .read_text()
            .map_err(|e| SourceFailure::new(self.id(), e.to_string()))?;

        let lines: Vec<String> = text.lines().map(str::to_string).collect();
        if lines.is_empty() {
            return Err(SourceFailure::empty(self.id()));
        }
        log::debug!("Read {} lines from {}", lines.len(), self.id());
        Ok(SourceLines {
            source_id: self.id(),
            lines,
        })
    }
}

/// Lines already in memory (tests, embedded schedules).
#[derive(Debug, Clone)]
pub struct MemorySource {
    id: String,
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(id: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_text(id: impl Into<String>, text: &str) -> Self {
        Self::new(id, text.lines())
    }
}

impl LineSource for MemorySource {
    fn id(&self) -> String {
        self.id.clone()
    }

    fn read_lines(&self) -> Result<SourceLines, SourceFailure> {
        if self.lines.is_empty() {
            return Err(SourceFailure::empty(self.id()));
        }
        Ok(SourceLines {
            source_id: self.id(),
            lines: self.lines.clone(),
        })
    }
}
