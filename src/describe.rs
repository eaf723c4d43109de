//! Splitting of `git describe` output into tag and suffix parts.

/// Parts of a `<tag>[-<N>-g<hash>][-dirty]` string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Describe {
    pub last_tag: String,
    /// Number of commits on top of `last_tag`, empty when absent
    pub commits_ahead: String,
    /// Abbreviated commit hash without the `g` prefix, empty when absent
    pub commit_hash: String,
    pub dirty: bool,
}

/// Parse `git describe --tags --long --dirty` style output.
///
/// The tag is matched non-greedily, so any trailing `-<N>-g<hash>` and
/// `-dirty` are taken as suffixes even when they were part of the tag name.
/// Never fails: input without recognized suffixes becomes the tag as is.
pub fn parse(text: &str) -> Describe {
    match lazy_regex::regex_captures!(
        r"(?s)^(.*?)(?:-([0-9]+)-g([0-9a-fA-F]{4,}))?(-dirty)?$",
        text
    ) {
        Some((_, last_tag, commits_ahead, commit_hash, dirty)) => Describe {
            last_tag: last_tag.into(),
            commits_ahead: commits_ahead.into(),
            commit_hash: commit_hash.into(),
            dirty: !dirty.is_empty(),
        },
        None => Describe {
            last_tag: text.into(),
            commits_ahead: String::new(),
            commit_hash: String::new(),
            dirty: false,
        },
    }
}
