// Edit-graph path nodes and the arena that links them.
//
// Nodes refer to their predecessor by index into the owning arena, so a
// chain is a plain `Vec` walk with no reference counting. The search
// arena keeps every explored node; `EditPath` keeps only the chain that
// ends at the terminal node, re-indexed from the origin forward.

/// Index of a node inside the arena that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// How a node was reached from its predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// Diagonal move over a pair of equal elements.
    Snake,
    /// Horizontal (delete) or vertical (insert) move. The origin is an
    /// `Edit` node without a predecessor.
    Edit,
}

/// One point on a path through the edit graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathNode {
    /// Position in the old sequence.
    pub i: usize,
    /// Position in the new sequence.
    pub j: usize,
    pub kind: NodeKind,
    pub prev: Option<NodeId>,
}

impl PathNode {
    #[inline]
    pub fn is_snake(&self) -> bool {
        self.kind == NodeKind::Snake
    }

    #[inline]
    pub fn is_origin(&self) -> bool {
        self.prev.is_none()
    }
}

// ---------------------------------------------------------------------------
// Search arena
// ---------------------------------------------------------------------------

/// Append-only node store used while searching.
#[derive(Debug, Default)]
pub(crate) struct NodeArena {
    nodes: Vec<PathNode>,
}

impl NodeArena {
    pub(crate) fn with_capacity(cap: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(cap),
        }
    }

    pub(crate) fn push(&mut self, i: usize, j: usize, kind: NodeKind, prev: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(PathNode { i, j, kind, prev });
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Copy the chain ending at `terminal` into a compact, forward-ordered path.
    pub(crate) fn extract(&self, terminal: NodeId) -> EditPath {
        let mut chain = Vec::new();
        let mut cursor = Some(terminal);
        while let Some(id) = cursor {
            let node = self.get(id);
            chain.push((node.i, node.j, node.kind));
            cursor = node.prev;
        }
        chain.reverse();
        EditPath::from_points(chain)
    }
}

// ---------------------------------------------------------------------------
// Finished path
// ---------------------------------------------------------------------------

/// The shortest path through an edit graph, from (0, 0) to (N, M).
///
/// Node 0 is the origin and the last node is the terminal. Each node's
/// `prev` points at the node before it, so `terminal()` followed through
/// `prev()` walks the whole path backwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPath {
    nodes: Vec<PathNode>,
}

impl EditPath {
    fn from_points(points: Vec<(usize, usize, NodeKind)>) -> Self {
        let nodes = points
            .into_iter()
            .enumerate()
            .map(|(idx, (i, j, kind))| PathNode {
                i,
                j,
                kind,
                prev: idx.checked_sub(1).map(NodeId),
            })
            .collect();
        Self { nodes }
    }

    /// Build a path from raw `(i, j, kind)` points in forward order.
    ///
    /// Only the shape is taken on trust; `diff::build_diff` checks every
    /// step against the sequences it is given.
    pub fn from_steps(points: Vec<(usize, usize, NodeKind)>) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        Some(Self::from_points(points))
    }

    /// The node at (N, M).
    pub fn terminal(&self) -> &PathNode {
        // `from_points` is only reached with at least the origin.
        &self.nodes[self.nodes.len() - 1]
    }

    /// The node at (0, 0).
    pub fn origin(&self) -> &PathNode {
        &self.nodes[0]
    }

    pub fn node(&self, id: NodeId) -> Option<&PathNode> {
        self.nodes.get(id.index())
    }

    /// Predecessor of `node`, if any.
    pub fn prev(&self, node: &PathNode) -> Option<&PathNode> {
        node.prev.and_then(|id| self.node(id))
    }

    /// Number of nodes, origin included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a path holds at least its origin.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of non-diagonal steps (D).
    pub fn edit_distance(&self) -> usize {
        self.nodes
            .iter()
            .skip(1)
            .filter(|n| !n.is_snake())
            .count()
    }

    /// Walk from the terminal back to the origin.
    pub fn iter_back(&self) -> Backward<'_> {
        Backward {
            path: self,
            cursor: Some(self.terminal()),
        }
    }

    /// Nodes in forward order, origin first.
    pub fn nodes(&self) -> &[PathNode] {
        &self.nodes
    }
}

/// Iterator following `prev` links from the terminal node.
pub struct Backward<'a> {
    path: &'a EditPath,
    cursor: Option<&'a PathNode>,
}

impl<'a> Iterator for Backward<'a> {
    type Item = &'a PathNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = self.path.prev(node);
        Some(node)
    }
}
