// Diff reconstruction: turns an edit path into an ordered edit script.
//
// Each step of the path becomes one operation. Diagonal steps are Equal,
// horizontal steps Delete (from old), vertical steps Insert (from new).
// Before emitting anything the path is checked against the sequences so
// a path built for other inputs is rejected instead of mis-indexed.

pub mod apply;
pub mod hunk;

use std::fmt;

use log::trace;

use crate::error::{DiffError, Result};
use crate::path::{EditPath, PathNode};

pub use apply::{apply, new_side, old_side};
pub use hunk::{Hunk, hunks};

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

/// Kind of a single edit-script operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Equal,
    Delete,
    Insert,
}

impl OpKind {
    /// Lowercase name, as used in JSON output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Equal => "equal",
            Self::Delete => "delete",
            Self::Insert => "insert",
        }
    }

    /// Line prefix character used by unified output.
    pub fn marker(self) -> char {
        match self {
            Self::Equal => ' ',
            Self::Delete => '-',
            Self::Insert => '+',
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation of an edit script.
///
/// `E` is the element handle: `&T` when borrowed from the inputs (what
/// `build_diff` returns), or an owned value after [`DiffOp::map`].
/// Equal operations carry both positions, Delete only `pos_a`, Insert
/// only `pos_b`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOp<E> {
    pub kind: OpKind,
    pub element: E,
    pub pos_a: Option<usize>,
    pub pos_b: Option<usize>,
}

impl<E> DiffOp<E> {
    pub fn equal(element: E, pos_a: usize, pos_b: usize) -> Self {
        Self {
            kind: OpKind::Equal,
            element,
            pos_a: Some(pos_a),
            pos_b: Some(pos_b),
        }
    }

    pub fn delete(element: E, pos_a: usize) -> Self {
        Self {
            kind: OpKind::Delete,
            element,
            pos_a: Some(pos_a),
            pos_b: None,
        }
    }

    pub fn insert(element: E, pos_b: usize) -> Self {
        Self {
            kind: OpKind::Insert,
            element,
            pos_a: None,
            pos_b: Some(pos_b),
        }
    }

    pub fn is_change(&self) -> bool {
        self.kind != OpKind::Equal
    }

    /// Convert the element while keeping kind and positions.
    pub fn map<U>(self, f: impl FnOnce(E) -> U) -> DiffOp<U> {
        DiffOp {
            kind: self.kind,
            element: f(self.element),
            pos_a: self.pos_a,
            pos_b: self.pos_b,
        }
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// Operation counts for an edit script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffStats {
    pub equal: usize,
    pub delete: usize,
    pub insert: usize,
}

impl DiffStats {
    pub fn from_ops<E>(ops: &[DiffOp<E>]) -> Self {
        let mut stats = Self::default();
        for op in ops {
            match op.kind {
                OpKind::Equal => stats.equal += 1,
                OpKind::Delete => stats.delete += 1,
                OpKind::Insert => stats.insert += 1,
            }
        }
        stats
    }

    /// Deletions plus insertions (D).
    pub fn edit_distance(&self) -> usize {
        self.delete + self.insert
    }

    pub fn is_identical(&self) -> bool {
        self.edit_distance() == 0
    }
}

// ---------------------------------------------------------------------------
// Reconstruction
// ---------------------------------------------------------------------------

/// Turn `path` into the edit script that transforms `old` into `new`.
///
/// Fails with [`DiffError::InvalidInput`] if the path does not run from
/// (0, 0) to `(old.len(), new.len())`, or if any step is not a valid
/// snake, delete or insert move over these sequences.
///
/// # Examples
///
/// ```
/// use sesdiff::diff::{build_diff, OpKind};
/// use sesdiff::path::build_path;
///
/// let old = ["a", "b", "c"];
/// let new = ["a", "x", "c"];
/// let path = build_path(&old, &new).unwrap();
/// let ops = build_diff(&path, &old, &new).unwrap();
/// let kinds: Vec<OpKind> = ops.iter().map(|op| op.kind).collect();
/// assert_eq!(
///     kinds,
///     [OpKind::Equal, OpKind::Delete, OpKind::Insert, OpKind::Equal]
/// );
/// ```
pub fn build_diff<'a, T: PartialEq>(
    path: &EditPath,
    old: &'a [T],
    new: &'a [T],
) -> Result<Vec<DiffOp<&'a T>>> {
    let terminal = path.terminal();
    if (terminal.i, terminal.j) != (old.len(), new.len()) {
        return Err(DiffError::InvalidInput(format!(
            "path ends at ({}, {}) but sequences have lengths ({}, {})",
            terminal.i,
            terminal.j,
            old.len(),
            new.len()
        )));
    }

    let mut chain: Vec<&PathNode> = path.iter_back().collect();
    chain.reverse();

    let origin = chain[0];
    if (origin.i, origin.j) != (0, 0) {
        return Err(DiffError::InvalidInput(format!(
            "path starts at ({}, {}) instead of the origin",
            origin.i, origin.j
        )));
    }

    let mut ops = Vec::with_capacity(chain.len() - 1);
    for pair in chain.windows(2) {
        ops.push(classify(pair[0], pair[1], old, new)?);
    }

    trace!("reconstructed {} operations from {} nodes", ops.len(), chain.len());
    Ok(ops)
}

fn classify<'a, T: PartialEq>(
    prev: &PathNode,
    cur: &PathNode,
    old: &'a [T],
    new: &'a [T],
) -> Result<DiffOp<&'a T>> {
    let di = cur.i.checked_sub(prev.i);
    let dj = cur.j.checked_sub(prev.j);

    match (di, dj) {
        (Some(1), Some(1)) if cur.is_snake() => match (old.get(prev.i), new.get(prev.j)) {
            (Some(a), Some(b)) if a == b => Ok(DiffOp::equal(a, prev.i, prev.j)),
            _ => Err(bad_step(prev, cur, "snake over unequal elements")),
        },
        (Some(1), Some(0)) if !cur.is_snake() => old
            .get(prev.i)
            .map(|a| DiffOp::delete(a, prev.i))
            .ok_or_else(|| bad_step(prev, cur, "delete past end of old")),
        (Some(0), Some(1)) if !cur.is_snake() => new
            .get(prev.j)
            .map(|b| DiffOp::insert(b, prev.j))
            .ok_or_else(|| bad_step(prev, cur, "insert past end of new")),
        _ => Err(bad_step(prev, cur, "not a snake, delete or insert move")),
    }
}

fn bad_step(prev: &PathNode, cur: &PathNode, what: &str) -> DiffError {
    DiffError::InvalidInput(format!(
        "step ({}, {}) -> ({}, {}): {what}",
        prev.i, prev.j, cur.i, cur.j
    ))
}
