use slog::Drain;

#[derive(Default)]
pub struct LoggingOptions {
    pub version: Option<String>,
}

/// Build root logger writing to stderr.
///
/// Stdout is reserved for the converted version, so nothing is ever logged
/// there.  Filters come from `RUST_LOG`, only errors pass when it's unset.
pub fn setup(options: LoggingOptions) -> slog::Logger {
    let drain = slog_term::FullFormat::new(
        slog_term::TermDecorator::new().stderr().build(),
    )
    .build()
    .fuse();

    let drain = slog_envlogger::new(drain).fuse();
    let drain = slog_async::Async::default(drain).fuse();

    let version = options.version.unwrap_or_else(|| "unknown".into());
    slog::Logger::root(drain, slog::o!("version" => version))
}
