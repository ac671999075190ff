#![no_main]
use libfuzzer_sys::fuzz_target;

const SUBCOMMANDS: [&str; 3] = ["diff", "stats", "config"];

fuzz_target!(|data: &[u8]| {
    let Some((&pick, rest)) = data.split_first() else {
        return;
    };

    // Lead with a real subcommand so clap gets past the first token.
    let mut args = vec![
        "sesdiff".to_string(),
        SUBCOMMANDS[pick as usize % SUBCOMMANDS.len()].to_string(),
    ];
    let text = String::from_utf8_lossy(rest);
    args.extend(text.split_whitespace().take(16).map(str::to_string));

    sesdiff::cli::fuzz_try_parse_args(&args);
});
