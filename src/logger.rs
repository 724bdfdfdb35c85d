/// Initializes the global logger. Diagnostics go to stderr, the generation
/// trace is printed separately on stdout.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .format_timestamp(None)
        .init();
}
