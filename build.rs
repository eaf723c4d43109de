// The application versions itself with the same conversion it implements.
#[allow(dead_code)]
#[path = "src/debian.rs"]
mod debian;
#[allow(dead_code)]
#[path = "src/describe.rs"]
mod describe;
#[allow(dead_code)]
#[path = "src/semver.rs"]
mod semver;

fn main() {
    // `--tags` to take lightweight release tags into account too
    // `--always` is for fallback while there were no releases yet
    // `--dirty` adds "-dirty" suffix when there are uncommitted changes
    //
    // Builds outside of a git checkout (e.g. from a source tarball) get
    // "unknown", which converts to `0.0.0~git.unknown`.
    let described = git_version::git_version!(
        args = ["--tags", "--always", "--dirty"],
        fallback = "unknown"
    );
    let describe = describe::parse(described);
    let semver = semver::parse_or_fallback(&describe.last_tag);
    let app_version = debian::ParsedVersion::new(describe, semver)
        .to_debian(|| chrono::Local::now().naive_local());
    println!("cargo:rustc-env=APP_VERSION={}", app_version);
}
