#![no_main]
use libfuzzer_sys::fuzz_target;
use sesdiff::engine::diff_lines;

fuzz_target!(|data: &[u8]| {
    let lossy = String::from_utf8_lossy(data);
    let text: &str = &lossy;
    let (old, new) = text.split_once('\u{0}').unwrap_or((text, ""));

    let d = diff_lines(old, new).unwrap();
    assert_eq!(d.replay().unwrap(), d.new);

    // Renderers must not panic on arbitrary content.
    let _ = d.render_plain();
    let _ = d.render_unified("old", "new", 3);
    let _ = d.render_unified("old", "new", 0);
});
