//! File records flowing through the pipeline.

use std::fmt;
use std::path::PathBuf;

use htmlvet_linter::Issue;
use tokio::io::AsyncRead;

/// The content payload of a file record.
pub enum FileContents {
    /// No content at all (directories, deleted files). Skipped by the lint
    /// stage, forwarded unchanged.
    Empty,
    /// Fully buffered content.
    Buffer(Vec<u8>),
    /// A live byte stream. The lint stage rejects these.
    Stream(Box<dyn AsyncRead + Send + Unpin>),
}

impl FileContents {
    /// Whether there is no content.
    pub fn is_empty(&self) -> bool {
        matches!(self, FileContents::Empty)
    }

    /// Whether the content is fully buffered.
    pub fn is_buffer(&self) -> bool {
        matches!(self, FileContents::Buffer(_))
    }

    /// Whether the content is a live stream.
    pub fn is_stream(&self) -> bool {
        matches!(self, FileContents::Stream(_))
    }
}

impl fmt::Debug for FileContents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileContents::Empty => f.write_str("Empty"),
            FileContents::Buffer(bytes) => write!(f, "Buffer({} bytes)", bytes.len()),
            FileContents::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}

/// One unit of work: a path, its contents, and the issues attached by the
/// lint stage.
///
/// `issues` stays `None` when linting was skipped; path and contents are
/// never rewritten by any stage.
#[derive(Debug)]
pub struct FileRecord {
    /// Path identifying the file within the stream.
    pub path: PathBuf,

    /// Content payload.
    pub contents: FileContents,

    /// Lint findings attached by the lint stage, `None` until then.
    pub issues: Option<Vec<Issue>>,
}

impl FileRecord {
    /// Creates a record with no content.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Empty,
            issues: None,
        }
    }

    /// Creates a record with buffered content.
    pub fn buffered(path: impl Into<PathBuf>, contents: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Buffer(contents.into()),
            issues: None,
        }
    }

    /// Creates a record with live-stream content.
    pub fn streamed(
        path: impl Into<PathBuf>,
        reader: impl AsyncRead + Send + Unpin + 'static,
    ) -> Self {
        Self {
            path: path.into(),
            contents: FileContents::Stream(Box::new(reader)),
            issues: None,
        }
    }

    /// The record's path, rendered for reports and error messages.
    pub fn file_name(&self) -> String {
        self.path.display().to_string()
    }
}
