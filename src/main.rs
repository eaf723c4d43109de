use std::io::{self, Read, Write};

use anyhow::Context; // For `context()`

mod converter;
mod debian;
mod describe;
mod input;
mod logging;
mod semver;

use converter::VersionConverter;

/// Convert the version read from `reader` and write it as a single line
fn run<R: Read, W: Write>(
    reader: R,
    mut writer: W,
    converter: &VersionConverter,
    logger: &slog::Logger,
) -> anyhow::Result<()> {
    let text = input::read_version(reader, logger)?;
    writeln!(writer, "{}", converter.convert(&text))
        .and_then(|()| writer.flush())
        .context("Failed to write version")
}

fn main() -> anyhow::Result<()> {
    let logger = logging::setup(logging::LoggingOptions {
        version: Some(env!("APP_VERSION").into()),
    });
    let converter = VersionConverter::new(logger.clone());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run(stdin.lock(), stdout.lock(), &converter, &logger)
}
