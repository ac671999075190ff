// Edit-graph pathfinder.
//
// `build_path` runs the O(ND) search and returns the winning chain of
// nodes from (0, 0) to (N, M).

mod frontier;
pub mod node;
pub mod search;

pub use node::{Backward, EditPath, NodeId, NodeKind, PathNode};
pub use search::build_path;
