// Furthest-reaching frontier for the O(ND) search.
//
// For every diagonal k = i - j in -MAX..=MAX this holds the furthest `i`
// reached so far and the node sitting at that point. Entries for
// iteration D overwrite those of D - 2; the search only ever reads the
// neighbours written in iteration D - 1.

use super::node::NodeId;

pub(crate) struct Frontier {
    furthest: Vec<usize>,
    nodes: Vec<Option<NodeId>>,
    offset: isize,
}

impl Frontier {
    /// Frontier covering diagonals `-max..=max` (`2 * max + 1` slots).
    pub(crate) fn new(max: usize) -> Self {
        let size = 2 * max + 1;
        Self {
            furthest: vec![0; size],
            nodes: vec![None; size],
            offset: max as isize,
        }
    }

    #[inline]
    fn slot(&self, k: isize) -> usize {
        (k + self.offset) as usize
    }

    #[inline]
    pub(crate) fn furthest(&self, k: isize) -> usize {
        self.furthest[self.slot(k)]
    }

    #[inline]
    pub(crate) fn node(&self, k: isize) -> Option<NodeId> {
        self.nodes[self.slot(k)]
    }

    #[inline]
    pub(crate) fn set(&mut self, k: isize, i: usize, node: NodeId) {
        let slot = self.slot(k);
        self.furthest[slot] = i;
        self.nodes[slot] = Some(node);
    }
}
