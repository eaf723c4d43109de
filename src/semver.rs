//! SemVer-like tag parsing with fallback for arbitrary tags and branch names.

use std::borrow::Cow;

/// Components of `v?major.minor.patch[-pre_release][+metadata]`.
///
/// Optional parts are empty strings when absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Semver {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub pre_release: String,
    pub metadata: String,
}

impl Semver {
    /// Version `0.0.0~git.<tag>` used for tags that are not versions.
    pub fn fallback(tag: &str) -> Self {
        Self {
            major: "0".into(),
            minor: "0".into(),
            patch: "0".into(),
            pre_release: format!("git.{}", sanitize(tag)),
            metadata: String::new(),
        }
    }
}

/// Replace every character not allowed in pre-release and metadata
/// identifiers with `.`
pub fn sanitize(text: &str) -> Cow<str> {
    lazy_regex::regex_replace_all!(r"[^0-9A-Za-z.\-]", text, ".")
}

/// Parse tag as SemVer-like version, falling back to [`Semver::fallback`].
pub fn parse_or_fallback(tag: &str) -> Semver {
    match lazy_regex::regex_captures!(
        r"^v?([0-9]+)\.([0-9]+)\.([0-9]+)(?:-([0-9A-Za-z.\-]+))?(?:\+([0-9A-Za-z.\-]+))?$",
        tag
    ) {
        Some((_, major, minor, patch, pre_release, metadata)) => Semver {
            major: major.into(),
            minor: minor.into(),
            patch: patch.into(),
            pre_release: pre_release.into(),
            metadata: metadata.into(),
        },
        None => Semver::fallback(tag),
    }
}
