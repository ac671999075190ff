#![no_main]
use libfuzzer_sys::fuzz_target;
use sesdiff::diff::{self, DiffStats};
use sesdiff::engine::diff_slices;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte picks the split point between old and new.
    let payload = &data[1..];
    let split = data[0] as usize % (payload.len() + 1);
    let (old, new) = payload.split_at(split);

    let ops = diff_slices(old, new).unwrap();
    let rebuilt = diff::apply(old, &ops).unwrap();
    assert_eq!(rebuilt, new);

    let stats = DiffStats::from_ops(&ops);
    assert_eq!(stats.equal + stats.delete, old.len());
    assert_eq!(stats.equal + stats.insert, new.len());
});
