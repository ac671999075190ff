// Replaying edit scripts.
//
// `apply` checks a script against the old sequence while rebuilding the
// new one. `old_side`/`new_side` recover either sequence from the script
// alone.

use std::borrow::Borrow;

use super::{DiffOp, OpKind};
use crate::error::{DiffError, Result};

/// Replay `ops` over `old` and return the resulting sequence.
///
/// Every Equal and Delete must match `old` at the replay cursor (and at
/// its recorded `pos_a`), and the script must consume all of `old`.
pub fn apply<T, E>(old: &[T], ops: &[DiffOp<E>]) -> Result<Vec<T>>
where
    T: PartialEq + Clone,
    E: Borrow<T>,
{
    let mut out = Vec::with_capacity(old.len());
    let mut cursor = 0usize;

    for op in ops {
        match op.kind {
            OpKind::Insert => out.push(op.element.borrow().clone()),
            OpKind::Equal | OpKind::Delete => {
                if let Some(pos) = op.pos_a {
                    if pos != cursor {
                        return Err(mismatch(cursor, format!("{} recorded at {pos}", op.kind)));
                    }
                }
                let current = old
                    .get(cursor)
                    .ok_or_else(|| mismatch(cursor, format!("{} past end of old", op.kind)))?;
                if current != op.element.borrow() {
                    return Err(mismatch(cursor, format!("{} element differs", op.kind)));
                }
                if op.kind == OpKind::Equal {
                    out.push(current.clone());
                }
                cursor += 1;
            }
        }
    }

    if cursor != old.len() {
        return Err(mismatch(
            cursor,
            format!("script stops with {} elements of old left", old.len() - cursor),
        ));
    }
    Ok(out)
}

/// The old sequence as described by the script (Equal and Delete elements).
pub fn old_side<E: Clone>(ops: &[DiffOp<E>]) -> Vec<E> {
    ops.iter()
        .filter(|op| op.kind != OpKind::Insert)
        .map(|op| op.element.clone())
        .collect()
}

/// The new sequence as described by the script (Equal and Insert elements).
pub fn new_side<E: Clone>(ops: &[DiffOp<E>]) -> Vec<E> {
    ops.iter()
        .filter(|op| op.kind != OpKind::Delete)
        .map(|op| op.element.clone())
        .collect()
}

fn mismatch(position: usize, reason: String) -> DiffError {
    DiffError::PatchMismatch { position, reason }
}
