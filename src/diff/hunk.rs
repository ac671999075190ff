// Grouping of an edit script into hunks.
//
// A hunk is a run of changes plus up to `context` unchanged elements on
// each side. Change runs separated by at most 2 * context Equal ops share
// one hunk, so no context line is printed twice.

use super::{DiffOp, OpKind};

/// A contiguous slice of an edit script with its coordinates.
///
/// Starts are 0-based positions in the old and new sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<E> {
    pub old_start: usize,
    pub old_len: usize,
    pub new_start: usize,
    pub new_len: usize,
    pub ops: Vec<DiffOp<E>>,
}

/// Split `ops` into hunks carrying `context` unchanged elements around changes.
///
/// An all-Equal script has no hunks.
pub fn hunks<E: Clone>(ops: &[DiffOp<E>], context: usize) -> Vec<Hunk<E>> {
    // Cursor into old/new before each op, plus the final position.
    let mut cursors = Vec::with_capacity(ops.len() + 1);
    let (mut a, mut b) = (0usize, 0usize);
    for op in ops {
        cursors.push((a, b));
        match op.kind {
            OpKind::Equal => {
                a += 1;
                b += 1;
            }
            OpKind::Delete => a += 1,
            OpKind::Insert => b += 1,
        }
    }
    cursors.push((a, b));

    let mut changes = ops
        .iter()
        .enumerate()
        .filter(|(_, op)| op.is_change())
        .map(|(idx, _)| idx)
        .peekable();

    let mut out = Vec::new();
    while let Some(first) = changes.next() {
        let mut last = first;
        while let Some(&next) = changes.peek() {
            if next - last - 1 > context.saturating_mul(2) {
                break;
            }
            last = next;
            changes.next();
        }

        let lo = first.saturating_sub(context);
        let hi = last.saturating_add(context).saturating_add(1).min(ops.len());
        let (old_start, new_start) = cursors[lo];
        let (old_end, new_end) = cursors[hi];
        out.push(Hunk {
            old_start,
            old_len: old_end - old_start,
            new_start,
            new_len: new_end - new_start,
            ops: ops[lo..hi].to_vec(),
        });
    }
    out
}
