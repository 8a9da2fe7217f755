//! Version extraction heuristic
//!
//! Finds the stability channel and the version number in a normalized string.
//! Both searches refuse to guess: more than one distinct candidate fails the
//! extraction instead of picking one.
//!
//! Accepted shapes:
//! - `0.23`, `1.23.5.1.3.4`, `foo 1.23.5 bar`
//! - `1.23f`, `1.2-1`, `1.4alpha`, `1.4-beta.1`, `1.3b1`, `1.3-preview1`
//! - bare numbers such as `123` when nothing else is in the string

use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::Regex;
use tracing::debug;

use crate::release::channel::Channel;
use crate::release::error::ExtractError;
use crate::release::normalizer::normalize;
use crate::release::types::Release;

static STABILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)stable|beta|alpha|rc|pre|preview|b\d|dev").unwrap()
});

/// Version number anchored at the start of the haystack, followed by whitespace or the end
static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(\d{1,3}(?:\.\d{1,3})+[a-z]?(?:[._ -]?(?:alpha|beta|pre|rc|b|stable|preview|dev)[._-]?\d*|-\d+)?)(?:\s|$)",
    )
    .unwrap()
});

static STABLE_INFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._-]stable[._-]?").unwrap());

static BARE_NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[1-9]\d{0,4}$").unwrap());

/// Extract a release from `input`.
///
/// `name` is the program name, stripped from the start of the input when present.
pub fn extract(input: &str, name: Option<&str>) -> Result<Release, ExtractError> {
    let text = normalize(input, name);

    let channel = detect_channel(&text).inspect_err(|e| {
        debug!("Failed to extract release from '{}': {}", input, e);
    })?;

    let version = detect_version(&text).inspect_err(|e| {
        debug!("Failed to extract release from '{}': {}", input, e);
    })?;

    Ok(Release::new(version, channel.unwrap_or_default()))
}

/// Detect the stability channel, `None` when no keyword is present
fn detect_channel(text: &str) -> Result<Option<Channel>, ExtractError> {
    let keywords = distinct_lowercase(STABILITY_RE.find_iter(text).map(|m| m.as_str()));

    match keywords.len() {
        0 => Ok(None),
        1 => Ok(keywords.first().map(|k| Channel::from_keyword(k))),
        _ => Err(ExtractError::AmbiguousStability {
            candidates: keywords.into_iter().collect(),
        }),
    }
}

fn detect_version(text: &str) -> Result<String, ExtractError> {
    let candidates: Vec<String> = find_version_candidates(text)
        .into_iter()
        .map(|candidate| STABLE_INFIX_RE.replace_all(candidate, "").into_owned())
        .collect();

    let distinct = distinct_lowercase(candidates.iter().map(String::as_str));
    match distinct.len() {
        0 if BARE_NUMBER_RE.is_match(text) => Ok(text.to_string()),
        0 => Err(ExtractError::NoVersionFound),
        1 => Ok(candidates.into_iter().next().unwrap_or_default()),
        _ => Err(ExtractError::AmbiguousVersionNumber {
            candidates: distinct.into_iter().collect(),
        }),
    }
}

/// Scan for non-overlapping version numbers that start at the beginning of the
/// text or right after whitespace.
fn find_version_candidates(text: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut pos = 0;
    let mut at_boundary = true;

    while pos < text.len() {
        if at_boundary && let Some(caps) = VERSION_RE.captures(&text[pos..]) {
            if let (Some(whole), Some(version)) = (caps.get(0), caps.get(1)) {
                candidates.push(version.as_str());
                at_boundary = text[..pos + whole.end()]
                    .chars()
                    .next_back()
                    .is_some_and(char::is_whitespace);
                pos += whole.end();
                continue;
            }
        }

        let Some(c) = text[pos..].chars().next() else {
            break;
        };
        at_boundary = c.is_whitespace();
        pos += c.len_utf8();
    }

    candidates
}

fn distinct_lowercase<'a>(values: impl Iterator<Item = &'a str>) -> IndexSet<String> {
    values.map(str::to_lowercase).collect()
}
