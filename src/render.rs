// Text renderers for edit scripts.
//
// Rendering is kept apart from the engine: the engine returns values,
// these functions turn them into plain listings, unified hunks or JSON.

use std::fmt::{Display, Write};

use crate::diff::{DiffOp, DiffStats, OpKind, hunks};

/// Default number of context lines in unified output.
pub const DEFAULT_CONTEXT: usize = 3;

/// One line per operation: `"  "` equal, `"- "` delete, `"+ "` insert.
pub fn plain<E: Display>(ops: &[DiffOp<E>]) -> String {
    let mut out = String::new();
    for op in ops {
        let prefix = match op.kind {
            OpKind::Equal => "  ",
            OpKind::Delete => "- ",
            OpKind::Insert => "+ ",
        };
        let _ = writeln!(out, "{prefix}{}", op.element);
    }
    out
}

/// Unified diff with `---`/`+++` headers and `@@` hunk headers.
///
/// Returns an empty string when the script has no changes.
pub fn unified<E: Display + Clone>(
    old_name: &str,
    new_name: &str,
    ops: &[DiffOp<E>],
    context: usize,
) -> String {
    let hs = hunks(ops, context);
    if hs.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    let _ = writeln!(out, "--- {old_name}");
    let _ = writeln!(out, "+++ {new_name}");
    for h in &hs {
        let _ = writeln!(
            out,
            "@@ -{} +{} @@",
            range(h.old_start, h.old_len),
            range(h.new_start, h.new_len)
        );
        for op in &h.ops {
            let _ = writeln!(out, "{}{}", op.kind.marker(), op.element);
        }
    }
    out
}

// GNU range format: 1-based start, length omitted when 1, and an empty
// range names the line before it.
fn range(start: usize, len: usize) -> String {
    match len {
        0 => format!("{start},0"),
        1 => format!("{}", start + 1),
        _ => format!("{},{len}", start + 1),
    }
}

/// JSON document with stats and every operation.
#[cfg(feature = "json")]
pub fn json<E: Display>(old_name: &str, new_name: &str, ops: &[DiffOp<E>]) -> serde_json::Value {
    let stats = DiffStats::from_ops(ops);
    let ops: Vec<serde_json::Value> = ops
        .iter()
        .map(|op| {
            serde_json::json!({
                "kind": op.kind.as_str(),
                "text": op.element.to_string(),
                "pos_a": op.pos_a,
                "pos_b": op.pos_b,
            })
        })
        .collect();
    serde_json::json!({
        "old": old_name,
        "new": new_name,
        "stats": stats_json(&stats),
        "ops": ops,
    })
}

#[cfg(feature = "json")]
pub fn stats_json(stats: &DiffStats) -> serde_json::Value {
    serde_json::json!({
        "equal": stats.equal,
        "insert": stats.insert,
        "delete": stats.delete,
        "edit_distance": stats.edit_distance(),
    })
}

/// `equal=N delete=N insert=N edit_distance=N`
pub fn stats_line(stats: &DiffStats) -> String {
    format!(
        "equal={} delete={} insert={} edit_distance={}",
        stats.equal,
        stats.delete,
        stats.insert,
        stats.edit_distance()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::diff_lines;

    #[test]
    fn plain_prefixes() {
        let d = diff_lines("a\nb\nc\n", "a\nx\nc\n").unwrap();
        assert_eq!(d.render_plain(), "  a\n- b\n+ x\n  c\n");
    }

    #[test]
    fn unified_single_hunk() {
        let d = diff_lines("a\nb\nc\nd\ne\n", "a\nb\nC\nd\ne\n").unwrap();
        let text = unified("old.txt", "new.txt", &d.ops, 1);
        assert_eq!(
            text,
            "--- old.txt\n+++ new.txt\n@@ -2,3 +2,3 @@\n b\n-c\n+C\n d\n"
        );
    }

    #[test]
    fn unified_empty_side_uses_zero_length_range() {
        let d = diff_lines("", "x\ny\n").unwrap();
        let text = unified("a", "b", &d.ops, DEFAULT_CONTEXT);
        assert_eq!(text, "--- a\n+++ b\n@@ -0,0 +1,2 @@\n+x\n+y\n");
    }

    #[test]
    fn unified_identical_is_empty() {
        let d = diff_lines("same\n", "same\n").unwrap();
        assert_eq!(unified("a", "b", &d.ops, DEFAULT_CONTEXT), "");
    }

    #[test]
    fn unified_huge_context_keeps_every_change() {
        let d = diff_lines("a\nb\nc\n", "a\nb\nX\n").unwrap();
        let text = unified("o", "n", &d.ops, usize::MAX);
        assert_eq!(text, "--- o\n+++ n\n@@ -1,3 +1,3 @@\n a\n b\n-c\n+X\n");
    }

    #[test]
    fn single_line_range_omits_length() {
        assert_eq!(range(4, 1), "5");
        assert_eq!(range(4, 0), "4,0");
        assert_eq!(range(0, 3), "1,3");
    }

    #[cfg(feature = "json")]
    #[test]
    fn json_has_positions_and_stats() {
        let d = diff_lines("a\nb\n", "a\nc\n").unwrap();
        let v = json("l", "r", &d.ops);
        assert_eq!(v["stats"]["edit_distance"], 2);
        assert_eq!(v["ops"][1]["kind"], "delete");
        assert_eq!(v["ops"][1]["pos_a"], 1);
        assert!(v["ops"][1]["pos_b"].is_null());
        assert_eq!(v["ops"][2]["text"], "c");
    }

    #[test]
    fn stats_line_format() {
        let stats = DiffStats {
            equal: 2,
            delete: 1,
            insert: 3,
        };
        assert_eq!(stats_line(&stats), "equal=2 delete=1 insert=3 edit_distance=4");
    }
}
