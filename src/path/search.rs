// Myers O(ND) shortest-path search over the edit graph.
//
// Iterates D = 0..=N+M. On each diagonal k in -D..=D (step 2) it picks
// the better neighbour from iteration D - 1, takes one edit step, then
// follows the snake as far as it goes. Every step allocates a node in the
// search arena so the winning chain can be extracted afterwards.

use log::{debug, error, trace};

use super::frontier::Frontier;
use super::node::{EditPath, NodeArena, NodeId, NodeKind};
use crate::error::{DiffError, Result};

/// Find the shortest edit path transforming `old` into `new`.
///
/// The returned path starts at (0, 0) and ends at `(old.len(), new.len())`.
/// When both diagonal neighbours reach the same `i`, the down move
/// (insertion) is taken, so a substitution comes out as delete-then-insert.
///
/// # Examples
///
/// ```
/// use sesdiff::path::build_path;
///
/// let path = build_path(&["a", "b", "c"], &["a", "x", "c"]).unwrap();
/// assert_eq!((path.terminal().i, path.terminal().j), (3, 3));
/// assert_eq!(path.edit_distance(), 2);
/// ```
pub fn build_path<T: PartialEq>(old: &[T], new: &[T]) -> Result<EditPath> {
    let n = old.len();
    let m = new.len();
    let max = n + m;

    let mut arena = NodeArena::with_capacity(max + 1);
    let mut v = Frontier::new(max);

    let violation = || DiffError::InvariantViolation {
        old_len: n,
        new_len: m,
    };

    for d in 0..=max as isize {
        for k in (-d..=d).step_by(2) {
            let (mut i, mut node) = if d == 0 {
                (0, arena.push(0, 0, NodeKind::Edit, None))
            } else if k == -d || (k != d && v.furthest(k - 1) < v.furthest(k + 1)) {
                // Down: insertion, i unchanged.
                let i = v.furthest(k + 1);
                let prev = v.node(k + 1).ok_or_else(violation)?;
                (i, step(&mut arena, i, k, prev))
            } else {
                // Right: deletion.
                let i = v.furthest(k - 1) + 1;
                let prev = v.node(k - 1).ok_or_else(violation)?;
                (i, step(&mut arena, i, k, prev))
            };

            let mut j = (i as isize - k) as usize;
            while i < n && j < m && old[i] == new[j] {
                i += 1;
                j += 1;
                node = arena.push(i, j, NodeKind::Snake, Some(node));
            }

            v.set(k, i, node);

            if i >= n && j >= m {
                debug!(
                    "edit path found: old_len={n}, new_len={m}, d={d}, explored={}",
                    arena.len()
                );
                return Ok(arena.extract(node));
            }
        }
        trace!("d={d} exhausted, explored={}", arena.len());
    }

    error!("no edit path within {max} edits (old_len={n}, new_len={m})");
    Err(violation())
}

#[inline]
fn step(arena: &mut NodeArena, i: usize, k: isize, prev: NodeId) -> NodeId {
    let j = (i as isize - k) as usize;
    arena.push(i, j, NodeKind::Edit, Some(prev))
}
