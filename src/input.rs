use std::io::{self, Read};

#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error("Failed to read version")]
    Io(#[from] io::Error),
}

/// Read the whole input as a single version string.
///
/// Surrounding whitespace is removed.  Invalid UTF-8 is replaced with
/// U+FFFD rather than rejected, so that the conversion still produces a
/// version.
pub fn read_version<R: Read>(
    mut reader: R,
    logger: &slog::Logger,
) -> Result<String, ReadError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            slog::warn!(
                logger, "Input is not valid UTF-8";
                "valid_up_to" => err.utf8_error().valid_up_to()
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };
    Ok(text.trim().into())
}
