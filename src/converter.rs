use chrono::NaiveDateTime;

use crate::debian::ParsedVersion;
use crate::{describe, semver};

/// Current local time, used for timestamps of dirty versions
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}

/// Converts `git describe` output to Debian version
pub struct VersionConverter {
    logger: slog::Logger,
    clock: fn() -> NaiveDateTime,
}

impl VersionConverter {
    pub fn new(logger: slog::Logger) -> Self {
        Self {
            logger,
            clock: local_now,
        }
    }

    #[allow(dead_code)]
    pub fn with_clock(self, clock: fn() -> NaiveDateTime) -> Self {
        Self { clock, ..self }
    }

    pub fn parse(&self, text: &str) -> ParsedVersion {
        let describe = describe::parse(text);
        let semver = semver::parse_or_fallback(&describe.last_tag);
        let parsed = ParsedVersion::new(describe, semver);
        slog::debug!(
            self.logger, "Parsed version";
            "major" => &parsed.major,
            "minor" => &parsed.minor,
            "patch" => &parsed.patch,
            "pre_release" => &parsed.pre_release,
            "metadata" => &parsed.metadata,
            "commits_ahead" => &parsed.commits_ahead,
            "commit_hash" => &parsed.commit_hash,
            "dirty" => parsed.dirty_marker()
        );
        parsed
    }

    pub fn convert(&self, text: &str) -> String {
        self.parse(text).to_debian(self.clock)
    }
}
