// Command-line front end for sesdiff.
//
// Subcommands mirror the library surface: `diff` renders an edit script,
// `stats` prints operation counts, `config` prints build details. Exit
// codes follow diff(1): 0 identical, 1 different, 2 trouble.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum, ValueHint};
use log::{LevelFilter, error, info};

use crate::io::{FileDiff, IoError, LoadOptions, diff_files, hex_digest};
use crate::render::{self, DEFAULT_CONTEXT};

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

const EXIT_SAME: i32 = 0;
const EXIT_DIFFERENT: i32 = 1;
const EXIT_TROUBLE: i32 = 2;

/// Line cap applied unless `--max-lines` says otherwise.
const DEFAULT_MAX_LINES: usize = 100_000;

// ---------------------------------------------------------------------------
// Clap CLI definition
// ---------------------------------------------------------------------------

/// Shortest-edit-script line diff (Myers O(ND)).
#[derive(Parser, Debug)]
#[command(
    name = "sesdiff",
    version,
    about = "Shortest-edit-script line diff",
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Cmd,

    /// Quiet mode (only errors are logged).
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbose mode (use multiple times for more detail).
    #[arg(short = 'v', long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Emit JSON instead of text where a command supports it.
    #[arg(long = "json", global = true)]
    json_output: bool,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Diff two text files line by line.
    Diff(DiffArgs),
    /// Print insert/delete/equal counts for two text files.
    Stats(StatsArgs),
    /// Print build/configuration details.
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    /// One line per operation with "  ", "- " or "+ " prefix.
    Plain,
    /// Unified hunks with `@@` headers.
    Unified,
    /// JSON document with every operation.
    Json,
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Original file.
    #[arg(value_hint = ValueHint::FilePath)]
    old: PathBuf,

    /// Changed file.
    #[arg(value_hint = ValueHint::FilePath)]
    new: PathBuf,

    /// Refuse inputs with more lines than this (0 disables the cap).
    /// Search time and memory both grow with input size times the
    /// number of edits, so this bounds both.
    #[arg(long = "max-lines", default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,
}

#[derive(Args, Debug)]
struct DiffArgs {
    #[command(flatten)]
    input: InputArgs,

    /// Output format.
    #[arg(long, short = 'f', value_enum, default_value_t = FormatArg::Unified)]
    format: FormatArg,

    /// Unchanged lines shown around each change (unified format).
    #[arg(long, short = 'U', default_value_t = DEFAULT_CONTEXT)]
    context: usize,
}

#[derive(Args, Debug)]
struct StatsArgs {
    #[command(flatten)]
    input: InputArgs,
}

// ---------------------------------------------------------------------------
// Resolved command + options (flattened from Cli)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Diff,
    Stats,
    Config,
}

#[derive(Debug)]
struct Options {
    command: Command,
    quiet: bool,
    verbose: u8,
    json_output: bool,
    format: FormatArg,
    context: usize,
    old_file: Option<PathBuf>,
    new_file: Option<PathBuf>,
    load: LoadOptions,
}

fn resolve_options(cli: Cli) -> Options {
    let quiet = cli.quiet;
    let verbose = cli.verbose.min(2);
    let json_output = cli.json_output;

    match cli.command {
        Cmd::Diff(args) => Options {
            command: Command::Diff,
            quiet,
            verbose,
            json_output,
            // Global --json wins over --format.
            format: if json_output {
                FormatArg::Json
            } else {
                args.format
            },
            context: args.context,
            old_file: Some(args.input.old),
            new_file: Some(args.input.new),
            load: line_cap(args.input.max_lines),
        },
        Cmd::Stats(args) => Options {
            command: Command::Stats,
            quiet,
            verbose,
            json_output,
            format: FormatArg::Plain,
            context: DEFAULT_CONTEXT,
            old_file: Some(args.input.old),
            new_file: Some(args.input.new),
            load: line_cap(args.input.max_lines),
        },
        Cmd::Config => Options {
            command: Command::Config,
            quiet,
            verbose,
            json_output,
            format: FormatArg::Plain,
            context: DEFAULT_CONTEXT,
            old_file: None,
            new_file: None,
            load: LoadOptions::default(),
        },
    }
}

fn line_cap(max_lines: usize) -> LoadOptions {
    LoadOptions {
        max_lines: (max_lines > 0).then_some(max_lines),
    }
}

fn log_filter(opts: &Options) -> LevelFilter {
    if opts.quiet {
        return LevelFilter::Error;
    }
    match opts.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}

// ---------------------------------------------------------------------------
// Config command
// ---------------------------------------------------------------------------

fn cmd_config() -> i32 {
    let version = env!("CARGO_PKG_VERSION");
    eprintln!("sesdiff version {version}");

    let json = cfg!(feature = "json") as u8;
    let file_io = cfg!(feature = "file-io") as u8;
    let parallel = cfg!(feature = "parallel") as u8;

    eprintln!("JSON={json}");
    eprintln!("FILE_IO={file_io}");
    eprintln!("PARALLEL={parallel}");
    eprintln!("DEFAULT_CONTEXT={DEFAULT_CONTEXT}");
    eprintln!("sizeof(usize)={}", std::mem::size_of::<usize>());

    EXIT_SAME
}

// ---------------------------------------------------------------------------
// Loading shared by diff/stats
// ---------------------------------------------------------------------------

fn load(opts: &Options) -> Result<FileDiff, IoError> {
    // Both paths are required positionals for diff/stats.
    let (Some(old), Some(new)) = (&opts.old_file, &opts.new_file) else {
        return Err(IoError::Diff(crate::error::DiffError::InvalidInput(
            "two input files are required".into(),
        )));
    };
    diff_files(old, new, &opts.load)
}

fn report(err: &IoError) -> i32 {
    if let IoError::Diff(e) = err {
        if e.is_internal() {
            error!("{e}");
        }
    }
    eprintln!("sesdiff: {err}");
    EXIT_TROUBLE
}

fn exit_for(fd: &FileDiff) -> i32 {
    if fd.is_identical() {
        EXIT_SAME
    } else {
        EXIT_DIFFERENT
    }
}

fn write_stdout(text: &str) -> i32 {
    let mut out = io::stdout().lock();
    match out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
        Ok(()) => EXIT_SAME,
        Err(e) => {
            eprintln!("sesdiff: write error: {e}");
            EXIT_TROUBLE
        }
    }
}

// ---------------------------------------------------------------------------
// Diff command
// ---------------------------------------------------------------------------

fn json_text(doc: &serde_json::Value) -> Result<String, serde_json::Error> {
    let mut text = serde_json::to_string_pretty(doc)?;
    text.push('\n');
    Ok(text)
}

fn render_diff(opts: &Options, fd: &FileDiff) -> Result<String, serde_json::Error> {
    let old_name = fd.old_path.display().to_string();
    let new_name = fd.new_path.display().to_string();
    match opts.format {
        FormatArg::Plain => Ok(fd.diff.render_plain()),
        FormatArg::Unified => Ok(fd.diff.render_unified(&old_name, &new_name, opts.context)),
        FormatArg::Json => {
            let mut doc = render::json(&old_name, &new_name, &fd.diff.ops);
            if let (Some(a), Some(b)) = (&fd.old_sha256, &fd.new_sha256) {
                doc["old_sha256"] = serde_json::Value::String(hex_digest(a));
                doc["new_sha256"] = serde_json::Value::String(hex_digest(b));
            }
            json_text(&doc)
        }
    }
}

fn cmd_diff(opts: &Options) -> i32 {
    let fd = match load(opts) {
        Ok(fd) => fd,
        Err(e) => return report(&e),
    };

    info!(
        "diff: old={} lines, new={} lines, edit_distance={}",
        fd.diff.old.len(),
        fd.diff.new.len(),
        fd.diff.stats.edit_distance()
    );

    let text = match render_diff(opts, &fd) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("sesdiff: json error: {e}");
            return EXIT_TROUBLE;
        }
    };
    match write_stdout(&text) {
        EXIT_SAME => exit_for(&fd),
        code => code,
    }
}

// ---------------------------------------------------------------------------
// Stats command
// ---------------------------------------------------------------------------

fn cmd_stats(opts: &Options) -> i32 {
    let fd = match load(opts) {
        Ok(fd) => fd,
        Err(e) => return report(&e),
    };

    let text = if opts.json_output {
        let mut doc = serde_json::json!({
            "command": "stats",
            "old": fd.old_path.display().to_string(),
            "new": fd.new_path.display().to_string(),
            "old_lines": fd.diff.old.len(),
            "new_lines": fd.diff.new.len(),
            "old_size": fd.old_size,
            "new_size": fd.new_size,
            "stats": render::stats_json(&fd.diff.stats),
        });
        if let (Some(a), Some(b)) = (&fd.old_sha256, &fd.new_sha256) {
            doc["old_sha256"] = serde_json::Value::String(hex_digest(a));
            doc["new_sha256"] = serde_json::Value::String(hex_digest(b));
        }
        match json_text(&doc) {
            Ok(text) => text,
            Err(e) => {
                eprintln!("sesdiff: json error: {e}");
                return EXIT_TROUBLE;
            }
        }
    } else {
        format!("{}\n", render::stats_line(&fd.diff.stats))
    };

    match write_stdout(&text) {
        EXIT_SAME => exit_for(&fd),
        code => code,
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

/// Main CLI entry point. Parses arguments via clap, dispatches commands.
pub fn run() -> ! {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = if e.use_stderr() { EXIT_TROUBLE } else { EXIT_SAME };
            let _ = e.print();
            process::exit(code);
        }
    };
    let opts = resolve_options(cli);

    // RUST_LOG, when set, overrides the -q/-v derived level.
    env_logger::Builder::new()
        .filter_level(log_filter(&opts))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .init();

    let exit_code = match opts.command {
        Command::Diff => cmd_diff(&opts),
        Command::Stats => cmd_stats(&opts),
        Command::Config => cmd_config(),
    };

    process::exit(exit_code);
}

/// Parse an argument vector without exiting; used by the fuzz targets.
#[cfg(feature = "fuzzing")]
pub fn fuzz_try_parse_args(args: &[String]) {
    if let Ok(cli) = Cli::try_parse_from(args) {
        let _ = resolve_options(cli);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
