//! Input cleanup ahead of version extraction
//!
//! Removes the noise that surrounds version numbers in filenames, tag names and
//! release titles. Steps run in a fixed order, each on the output of the previous one:
//!
//! 1. trim surrounding whitespace
//! 2. drop the program name prefix (`myapp-1.2` -> `1.2`)
//! 3. drop trailing archive extensions (`1.2.tar.gz.zip` -> `1.2`)
//! 4. drop a `release`/`version` style prefix (`version 1.2` -> `1.2`)
//! 5. drop a leading `v` or `r` (`v1.2` -> `1.2`)
//! 6. blank out the words `final` and `release`
//! 7. turn `1_2_3` and `1-2-3` into `1.2.3`
//!
//! Only one leading `v`/`r` is dropped, so `vv1.2` needs two passes to settle.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};
use tracing::warn;

static EXTENSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\.(?:tar\.(?:gz|bz2|xz|zst)|tgz|tbz2?|txz|zip|7z|rar|exe|msi|dmg|deb|rpm|apk|appimage|jar|whl|gem|nupkg)$",
    )
    .unwrap()
});

static PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:releases|release|rel|version|vers|v\.)[ _/-]?").unwrap()
});

static MARKER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)^[vr]").unwrap());

static NOISE_WORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:^|[._ -])(?:final|release)(?:[._ -]|$)").unwrap()
});

static UNDERSCORE_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9_]*$").unwrap());

static HYPHEN_ONLY_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9-]*$").unwrap());

/// Clean `input` so that the version number is easy to spot.
///
/// `name` is the program name; when given, a leading occurrence of it
/// (case-insensitive, optionally followed by one of ` _/-`) is removed.
pub fn normalize(input: &str, name: Option<&str>) -> String {
    let mut text = input.trim().to_string();

    if let Some(name) = name.filter(|n| !n.is_empty()) {
        text = strip_program_name(&text, name);
    }

    while let Some(extension) = EXTENSION_RE.find(&text) {
        text.truncate(extension.start());
    }
    text = PREFIX_RE.replace(&text, "").into_owned();
    text = MARKER_RE.replace(&text, "").into_owned();
    text = NOISE_WORD_RE.replace_all(&text, " ").into_owned();
    text = text.trim().to_string();

    if UNDERSCORE_ONLY_RE.is_match(&text) {
        text = text.replace('_', ".");
    }
    if HYPHEN_ONLY_RE.is_match(&text) {
        text = text.replace('-', ".");
    }

    text
}

fn strip_program_name(text: &str, name: &str) -> String {
    let pattern = format!("^{}[ _/-]?", regex::escape(name));
    let Ok(name_re) = RegexBuilder::new(&pattern)
        .case_insensitive(true)
        .build()
        .inspect_err(|e| {
            warn!("Failed to build program name pattern for '{}': {}", name, e);
        })
    else {
        return text.to_string();
    };

    name_re.replace(text, "").into_owned()
}
