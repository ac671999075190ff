//! sesdiff: shortest edit scripts via the Myers O(ND) algorithm.
//!
//! The crate provides:
//! - An edit-graph pathfinder (`path`) returning the optimal chain of nodes
//! - A reconstructor (`diff`) turning that chain into Equal/Delete/Insert ops
//! - High-level slice, text and batch APIs (`engine`)
//! - Text renderers (`render`) and file-oriented helpers (`io`)
//! - An optional CLI (`cli` feature)
//!
//! # Quick Start
//!
//! ```
//! use sesdiff::diff::{build_diff, OpKind};
//! use sesdiff::path::build_path;
//!
//! let old = ["a", "b", "c"];
//! let new = ["a", "x", "c"];
//!
//! let path = build_path(&old, &new).unwrap();
//! let ops = build_diff(&path, &old, &new).unwrap();
//! let changes = ops.iter().filter(|op| op.kind != OpKind::Equal).count();
//! assert_eq!(changes, 2);
//! ```

pub mod diff;
pub mod engine;
pub mod error;
pub mod io;
pub mod path;
pub mod render;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::DiffError;
