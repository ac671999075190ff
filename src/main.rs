fn main() {
    #[cfg(feature = "cli")]
    sesdiff::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("sesdiff: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(2);
    }
}
