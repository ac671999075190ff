// File-level helpers for line diffing.
//
// Reads both files fully into memory, decodes them as UTF-8 and splits
// them into lines before handing them to the engine. With the `file-io`
// feature a SHA-256 digest is taken of each file; byte-identical files
// skip the search entirely.

use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

#[cfg(feature = "file-io")]
use sha2::{Digest, Sha256};

use crate::engine::{LineDiff, split_lines};
use crate::error::DiffError;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Limits applied while loading inputs.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// Refuse files with more lines than this. The search is O((N+M)·D)
    /// in both time and memory, so capping inputs bounds both.
    pub max_lines: Option<usize>,
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Error type for file-based diffing.
#[derive(Debug, Error)]
pub enum IoError {
    /// File could not be opened or read.
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// File is not valid UTF-8 text.
    #[error("{}: not valid UTF-8 text", .path.display())]
    NotUtf8 {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// File has more lines than `LoadOptions::max_lines`.
    #[error("{}: {} lines exceeds the limit of {}", .path.display(), .lines, .max)]
    TooLarge {
        path: PathBuf,
        lines: usize,
        max: usize,
    },

    /// The engine rejected the inputs.
    #[error(transparent)]
    Diff(#[from] DiffError),
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// A file read into memory and split into lines.
#[derive(Debug, Clone)]
pub struct LoadedText {
    pub path: PathBuf,
    pub lines: Vec<String>,
    /// Size of the file in bytes.
    pub size: u64,
    /// SHA-256 of the raw bytes (if `file-io` feature is enabled).
    pub sha256: Option<[u8; 32]>,
}

/// Read `path` as UTF-8 and split it into lines.
pub fn load_lines(path: &Path, opts: &LoadOptions) -> Result<LoadedText, IoError> {
    let bytes = std::fs::read(path).map_err(|source| IoError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let size = bytes.len() as u64;

    #[cfg(feature = "file-io")]
    let sha256 = Some(Sha256::digest(&bytes).into());
    #[cfg(not(feature = "file-io"))]
    let sha256: Option<[u8; 32]> = None;

    let text = String::from_utf8(bytes).map_err(|source| IoError::NotUtf8 {
        path: path.to_path_buf(),
        source,
    })?;
    let lines = split_lines(&text);

    if let Some(max) = opts.max_lines {
        if lines.len() > max {
            return Err(IoError::TooLarge {
                path: path.to_path_buf(),
                lines: lines.len(),
                max,
            });
        }
    }

    debug!("loaded {}: {} bytes, {} lines", path.display(), size, lines.len());
    Ok(LoadedText {
        path: path.to_path_buf(),
        lines,
        size,
        sha256,
    })
}

// ---------------------------------------------------------------------------
// diff_files
// ---------------------------------------------------------------------------

/// Result of `diff_files()`.
#[derive(Debug, Clone)]
pub struct FileDiff {
    pub old_path: PathBuf,
    pub new_path: PathBuf,
    pub old_size: u64,
    pub new_size: u64,
    pub old_sha256: Option<[u8; 32]>,
    pub new_sha256: Option<[u8; 32]>,
    pub diff: LineDiff,
}

impl FileDiff {
    pub fn is_identical(&self) -> bool {
        self.diff.is_identical()
    }
}

/// Load two text files and diff them line by line.
pub fn diff_files(old_path: &Path, new_path: &Path, opts: &LoadOptions) -> Result<FileDiff, IoError> {
    let old = load_lines(old_path, opts)?;
    let new = load_lines(new_path, opts)?;

    let diff = match (old.sha256, new.sha256) {
        (Some(a), Some(b)) if a == b => {
            debug!("identical digests, skipping search");
            LineDiff::identical(old.lines)
        }
        _ => LineDiff::from_lines(old.lines, new.lines)?,
    };

    Ok(FileDiff {
        old_path: old.path,
        new_path: new.path,
        old_size: old.size,
        new_size: new.size,
        old_sha256: old.sha256,
        new_sha256: new.sha256,
        diff,
    })
}

/// Lowercase hex rendering of a digest.
pub fn hex_digest(digest: &[u8; 32]) -> String {
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
