//! Document management
//! Binds a line store to its backing file and tracks unsaved edits

use crate::constants::errors::{
    LOAD_FAILED, MSG_LOAD_FAILED, MSG_SAVE_FAILED, SAVE_FAILED, UTF8_ERROR,
};
use crate::error::{EditError, ErrorType, Result};
use crate::line_store::{Line, LineStore};
use crate::settings::EditorOptions;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Line terminator written after every line
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    #[default]
    LF,
    CRLF,
}

impl LineEnding {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::LF => "\n",
            LineEnding::CRLF => "\r\n",
        }
    }
}

/// Lines of a file plus the metadata needed to write them back
#[derive(Debug)]
pub struct Document {
    store: LineStore,
    file_path: PathBuf,
    /// Ending found in the file when it was loaded
    detected_ending: LineEnding,
    options: EditorOptions,
    /// The file did not exist when the document was opened
    is_new: bool,
    /// Current revision number (incremented on edits)
    revision: u64,
    /// Revision of last save
    last_saved_revision: u64,
}

impl Document {
    /// Create an empty document that will be saved to `path`
    pub fn empty(path: impl AsRef<Path>) -> Self {
        Document {
            store: LineStore::new(),
            file_path: path.as_ref().to_path_buf(),
            detected_ending: LineEnding::LF,
            options: EditorOptions::default(),
            is_new: true,
            revision: 0,
            last_saved_revision: 0,
        }
    }

    /// Load a document from `path`.
    ///
    /// A missing file is not an error: the document starts empty and
    /// `is_new()` reports it. Any other read failure is returned.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "file does not exist, starting empty");
                return Ok(Self::empty(path));
            }
            Err(e) => {
                return Err(EditError::warning(
                    ErrorType::Io,
                    LOAD_FAILED,
                    format!("{MSG_LOAD_FAILED} {}: {e}", path.display()),
                ));
            }
        };

        let (lines, detected_ending) = split_lines(&bytes);
        let lossy = lines.iter().filter(|line| line.is_lossy()).count();
        if lossy > 0 {
            tracing::warn!(
                code = UTF8_ERROR,
                path = %path.display(),
                lines = lossy,
                "file is not valid UTF-8, bytes kept as read"
            );
        }
        tracing::info!(
            path = %path.display(),
            lines = lines.len(),
            ending = ?detected_ending,
            "loaded file"
        );

        Ok(Document {
            store: LineStore::from_lines(lines),
            file_path: path.to_path_buf(),
            detected_ending,
            options: EditorOptions::default(),
            is_new: false,
            revision: 0,
            last_saved_revision: 0,
        })
    }

    /// Replace the save options
    pub fn set_options(&mut self, options: EditorOptions) {
        self.options = options;
    }

    #[must_use]
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    /// Line ending used on save: the forced option, else the detected one
    #[must_use]
    pub fn line_ending(&self) -> LineEnding {
        self.options.line_ending.unwrap_or(self.detected_ending)
    }

    /// Read access to the lines
    #[must_use]
    pub fn store(&self) -> &LineStore {
        &self.store
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// See [`LineStore::insert_at`]
    pub fn insert_at(&mut self, text: impl Into<Line>, pos: usize) -> usize {
        let landed = self.store.insert_at(text, pos);
        self.mark_dirty();
        landed
    }

    /// See [`LineStore::delete_at`]
    pub fn delete_at(&mut self, pos: usize) -> Result<String> {
        let removed = self.store.delete_at(pos)?;
        self.mark_dirty();
        Ok(removed)
    }

    /// See [`LineStore::delete_range`]
    pub fn delete_range(&mut self, start: usize, end: usize) -> Result<Vec<String>> {
        let removed = self.store.delete_range(start, end)?;
        self.mark_dirty();
        Ok(removed)
    }

    /// Write every line, each followed by the line ending, to the file.
    ///
    /// Failures come back as warnings: the caller reports them and the
    /// document stays dirty.
    pub fn save(&mut self) -> Result<()> {
        let ending = self.line_ending().as_str();
        let mut data = Vec::new();
        for line in self.store.lines() {
            data.extend_from_slice(line.as_bytes());
            data.extend_from_slice(ending.as_bytes());
        }

        let written = if self.options.atomic_save {
            write_atomic(&self.file_path, &data)
        } else {
            fs::write(&self.file_path, &data)
        };

        written.map_err(|e| {
            tracing::warn!(path = %self.file_path.display(), error = %e, "save failed");
            EditError::warning(ErrorType::Io, SAVE_FAILED, format!("{MSG_SAVE_FAILED}: {e}"))
        })?;

        self.last_saved_revision = self.revision;
        self.is_new = false;
        tracing::info!(
            path = %self.file_path.display(),
            lines = self.store.len(),
            "saved file"
        );
        Ok(())
    }

    /// Mark document as dirty (increment revision)
    pub fn mark_dirty(&mut self) {
        self.revision += 1;
    }

    /// Check if document has unsaved changes
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.revision != self.last_saved_revision
    }

    /// The file did not exist when the document was opened and has not been saved since
    #[must_use]
    pub fn is_new(&self) -> bool {
        self.is_new
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Name shown to the user: the path as given on the command line
    #[must_use]
    pub fn display_name(&self) -> String {
        self.file_path.display().to_string()
    }
}

/// Split file contents into lines and pick the line ending.
///
/// A final line without a terminator is kept; a terminator at the very end
/// does not produce an extra empty line. The file counts as CRLF when most
/// of its terminated lines end in `\r\n`; only then is the `\r` stripped,
/// so the minority lines of an LF file keep their `\r` on save.
fn split_lines(bytes: &[u8]) -> (Vec<Line>, LineEnding) {
    if bytes.is_empty() {
        return (Vec::new(), LineEnding::LF);
    }

    let terminated = bytes.iter().filter(|&&b| b == b'\n').count();
    let crlf = bytes.windows(2).filter(|w| *w == b"\r\n").count();
    let ending = if crlf * 2 > terminated {
        LineEnding::CRLF
    } else {
        LineEnding::LF
    };

    let body = bytes.strip_suffix(b"\n").unwrap_or(bytes);
    let lines = body
        .split(|&b| b == b'\n')
        .map(|line| match ending {
            LineEnding::CRLF => line.strip_suffix(b"\r").unwrap_or(line),
            LineEnding::LF => line,
        })
        .map(Line::from)
        .collect();
    (lines, ending)
}

/// Write to a hidden temp file next to the target, sync it, then rename it
/// over the target.
///
/// A symlink is followed so the file it points at is replaced, and an
/// existing file's permissions (and owner, where allowed) carry over.
fn write_atomic(path: &Path, data: &[u8]) -> io::Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let existing = fs::metadata(&target).ok();

    let parent = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let temp_path = parent.join(format!(
        ".{}.tmp",
        target.file_name().and_then(|n| n.to_str()).unwrap_or("file")
    ));

    let written = write_and_replace(&temp_path, &target, data, existing.as_ref());
    if written.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    written
}

fn write_and_replace(
    temp_path: &Path,
    target: &Path,
    data: &[u8],
    existing: Option<&fs::Metadata>,
) -> io::Result<()> {
    let mut file = fs::File::create(temp_path)?;
    file.write_all(data)?;
    if let Some(meta) = existing {
        file.set_permissions(meta.permissions())?;
        preserve_owner(&file, meta);
    }
    file.sync_all()?;
    fs::rename(temp_path, target)
}

#[cfg(unix)]
fn preserve_owner(file: &fs::File, meta: &fs::Metadata) {
    use std::os::unix::fs::{fchown, MetadataExt};
    if let Err(e) = fchown(file, Some(meta.uid()), Some(meta.gid())) {
        tracing::debug!(error = %e, "could not keep file owner");
    }
}

#[cfg(not(unix))]
fn preserve_owner(_file: &fs::File, _meta: &fs::Metadata) {}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
