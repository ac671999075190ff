// High-level diff APIs.
//
// Ties the pathfinder to the reconstructor and adds the text-oriented
// entry points used by the loader and CLI:
//   - `diff_slices`: any `T: PartialEq`, borrowed operations
//   - `diff_lines`: two texts split on line boundaries, owned result
//   - `diff_batch`: many independent pairs, optionally on a thread pool

use log::debug;

use crate::diff::{self, DiffOp, DiffStats, build_diff};
use crate::error::Result;
use crate::path::build_path;
use crate::render;

// ---------------------------------------------------------------------------
// Slices
// ---------------------------------------------------------------------------

/// Shortest edit script turning `old` into `new`.
///
/// # Examples
///
/// ```
/// use sesdiff::engine::diff_slices;
/// use sesdiff::diff::OpKind;
///
/// let ops = diff_slices(&[1, 2, 3], &[1, 3, 4]).unwrap();
/// let kinds: Vec<OpKind> = ops.iter().map(|op| op.kind).collect();
/// assert_eq!(
///     kinds,
///     [OpKind::Equal, OpKind::Delete, OpKind::Equal, OpKind::Insert]
/// );
/// ```
pub fn diff_slices<'a, T: PartialEq>(old: &'a [T], new: &'a [T]) -> Result<Vec<DiffOp<&'a T>>> {
    let path = build_path(old, new)?;
    build_diff(&path, old, new)
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Line diff of two texts, owning its lines and operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineDiff {
    pub old: Vec<String>,
    pub new: Vec<String>,
    pub ops: Vec<DiffOp<String>>,
    pub stats: DiffStats,
}

impl LineDiff {
    /// Diff two already-split line vectors.
    pub fn from_lines(old: Vec<String>, new: Vec<String>) -> Result<Self> {
        let ops: Vec<DiffOp<String>> = diff_slices(&old, &new)?
            .into_iter()
            .map(|op| op.map(String::clone))
            .collect();
        let stats = DiffStats::from_ops(&ops);
        debug!(
            "line diff: old={} new={} edit_distance={}",
            old.len(),
            new.len(),
            stats.edit_distance()
        );
        Ok(Self {
            old,
            new,
            ops,
            stats,
        })
    }

    /// All-Equal diff of `lines` against itself, without running the search.
    pub fn identical(lines: Vec<String>) -> Self {
        let ops: Vec<DiffOp<String>> = lines
            .iter()
            .enumerate()
            .map(|(idx, line)| DiffOp::equal(line.clone(), idx, idx))
            .collect();
        let stats = DiffStats::from_ops(&ops);
        Self {
            old: lines.clone(),
            new: lines,
            ops,
            stats,
        }
    }

    pub fn is_identical(&self) -> bool {
        self.stats.is_identical()
    }

    pub fn render_plain(&self) -> String {
        render::plain(&self.ops)
    }

    pub fn render_unified(&self, old_name: &str, new_name: &str, context: usize) -> String {
        render::unified(old_name, new_name, &self.ops, context)
    }

    /// Replay the script over `old`; always equals `new` for a well-formed diff.
    pub fn replay(&self) -> Result<Vec<String>> {
        diff::apply(&self.old, &self.ops)
    }
}

/// Split `text` into lines (`\n` or `\r\n`, no trailing empty line).
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines().map(str::to_string).collect()
}

/// Line diff of two texts.
pub fn diff_lines(old: &str, new: &str) -> Result<LineDiff> {
    LineDiff::from_lines(split_lines(old), split_lines(new))
}

// ---------------------------------------------------------------------------
// Batches
// ---------------------------------------------------------------------------

/// Diff every `(old, new)` pair. Results keep the input order.
///
/// With the `parallel` feature the pairs are spread over rayon's global
/// pool; each diff is independent so no state is shared between them.
#[cfg(feature = "parallel")]
pub fn diff_batch<'a, T: PartialEq + Sync>(
    pairs: &[(&'a [T], &'a [T])],
) -> Vec<Result<Vec<DiffOp<&'a T>>>> {
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|&(old, new)| diff_slices(old, new))
        .collect()
}

/// Diff every `(old, new)` pair. Results keep the input order.
#[cfg(not(feature = "parallel"))]
pub fn diff_batch<'a, T: PartialEq>(pairs: &[(&'a [T], &'a [T])]) -> Vec<Result<Vec<DiffOp<&'a T>>>> {
    pairs.iter().map(|&(old, new)| diff_slices(old, new)).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
