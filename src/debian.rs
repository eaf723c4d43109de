//! Reassembly of parsed parts into a Debian upstream version.
//!
//! The result has the form
//! `major.minor.patch[~pre][+N][+dirty.YYYYMMDDHHMMSS][~hash][~metadata]`.
//! `~` makes pre-releases sort before the release itself, and `-` is
//! replaced with `.` since it separates the Debian revision.

use chrono::NaiveDateTime;

use crate::describe::Describe;
use crate::semver::Semver;

pub const DIRTY_MARKER: &str = "-dirty";

/// Format of the timestamp appended to dirty versions.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedVersion {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub pre_release: String,
    pub metadata: String,
    pub commits_ahead: String,
    pub commit_hash: String,
    pub dirty: bool,
}

impl ParsedVersion {
    /// Combine outer and inner parse results.
    pub fn new(describe: Describe, semver: Semver) -> Self {
        Self {
            major: semver.major,
            minor: semver.minor,
            patch: semver.patch,
            pre_release: semver.pre_release,
            metadata: semver.metadata,
            commits_ahead: describe.commits_ahead,
            commit_hash: describe.commit_hash,
            dirty: describe.dirty,
        }
    }

    /// Dirty marker as it appeared in the input, empty when clean.
    pub fn dirty_marker(&self) -> &'static str {
        if self.dirty {
            DIRTY_MARKER
        } else {
            ""
        }
    }

    /// Render as Debian version.  `now` is called only for dirty versions.
    pub fn to_debian<F>(&self, now: F) -> String
    where
        F: FnOnce() -> NaiveDateTime,
    {
        let mut version =
            format!("{}.{}.{}", self.major, self.minor, self.patch);
        if !self.pre_release.is_empty() {
            version.push('~');
            version.push_str(&self.pre_release.replace('-', "."));
        }
        if !self.commits_ahead.is_empty() {
            version.push('+');
            version.push_str(&self.commits_ahead);
        }
        if self.dirty {
            version.push_str("+dirty.");
            version.push_str(&now().format(TIMESTAMP_FORMAT).to_string());
        }
        if !self.commit_hash.is_empty() {
            version.push('~');
            version.push_str(&self.commit_hash);
        }
        if !self.metadata.is_empty() {
            version.push('~');
            version.push_str(&self.metadata.replace('-', "."));
        }
        version
    }
}

#[cfg(test)]
mod test {
    use chrono::{NaiveDate, NaiveDateTime};

    use super::ParsedVersion;
    use crate::{describe::Describe, semver::Semver};

    fn base() -> ParsedVersion {
        ParsedVersion {
            major: "1".into(),
            minor: "2".into(),
            patch: "3".into(),
            pre_release: String::new(),
            metadata: String::new(),
            commits_ahead: String::new(),
            commit_hash: String::new(),
            dirty: false,
        }
    }

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 7)
            .and_then(|date| date.and_hms_opt(9, 5, 2))
            .unwrap()
    }

    fn never() -> NaiveDateTime {
        panic!("clock must not be read for clean versions")
    }

    #[test]
    fn test_new() {
        let describe = Describe {
            last_tag: "v1.2.3-rc1".into(),
            commits_ahead: "4".into(),
            commit_hash: "abcd".into(),
            dirty: true,
        };
        let semver = Semver {
            major: "1".into(),
            minor: "2".into(),
            patch: "3".into(),
            pre_release: "rc1".into(),
            metadata: String::new(),
        };
        assert_eq!(
            ParsedVersion::new(describe, semver),
            ParsedVersion {
                pre_release: "rc1".into(),
                commits_ahead: "4".into(),
                commit_hash: "abcd".into(),
                dirty: true,
                ..base()
            }
        );
    }

    #[test]
    fn test_release() {
        assert_eq!(base().to_debian(never), "1.2.3");
    }

    #[test]
    fn test_pre_release_dashes() {
        let version = ParsedVersion {
            pre_release: "rc-1.x-y".into(),
            ..base()
        };
        assert_eq!(version.to_debian(never), "1.2.3~rc.1.x.y");
    }

    #[test]
    fn test_metadata_dashes() {
        let version = ParsedVersion {
            metadata: "meta-data".into(),
            ..base()
        };
        assert_eq!(version.to_debian(never), "1.2.3~meta.data");
    }

    #[test]
    fn test_dirty_timestamp() {
        let version = ParsedVersion {
            dirty: true,
            ..base()
        };
        assert_eq!(version.to_debian(fixed_time), "1.2.3+dirty.20240307090502");
    }

    #[test]
    fn test_full_order() {
        let version = ParsedVersion {
            pre_release: "beta-2".into(),
            metadata: "build-9".into(),
            commits_ahead: "15".into(),
            commit_hash: "0123abc".into(),
            dirty: true,
            ..base()
        };
        assert_eq!(
            version.to_debian(fixed_time),
            "1.2.3~beta.2+15+dirty.20240307090502~0123abc~build.9"
        );
    }

    #[test]
    fn test_hash_and_metadata_without_others() {
        let version = ParsedVersion {
            metadata: "m".into(),
            commit_hash: "ABCDEF".into(),
            ..base()
        };
        assert_eq!(version.to_debian(never), "1.2.3~ABCDEF~m");
    }

    #[test]
    fn test_dirty_marker() {
        assert_eq!(base().dirty_marker(), "");
        let version = ParsedVersion {
            dirty: true,
            ..base()
        };
        assert_eq!(version.dirty_marker(), "-dirty");
    }
}
