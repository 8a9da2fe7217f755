//! Release-listing entries
//!
//! Applies the extractor to entries of a release listing (GitHub's
//! `/repos/{owner}/{repo}/releases` shape) and groups the results into stable
//! and pre-release lists.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::warn;

use crate::release::channel::Channel;
use crate::release::dotted::compare_versions;
use crate::release::error::{ExtractError, FeedError};
use crate::release::extractor::extract;
use crate::release::types::Release;

/// One entry of a release listing
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct FeedEntry {
    #[serde(default)]
    pub name: Option<String>,
    pub tag_name: String,
    #[serde(default)]
    pub prerelease: bool,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
}

/// Read a JSON array of release entries from `path`.
pub fn load_feed(path: &Path) -> Result<Vec<FeedEntry>, FeedError> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Extract a release from a listing entry.
///
/// The entry title is tried first and the tag name second. The publication
/// date becomes the release date, and entries flagged as pre-release never
/// come out as stable.
pub fn analyse_entry(entry: &FeedEntry, name: Option<&str>) -> Result<Release, ExtractError> {
    let from_title = entry
        .name
        .as_deref()
        .filter(|title| !title.trim().is_empty())
        .map(|title| extract(title, name));

    let release = match from_title {
        Some(Ok(release)) => release,
        _ => extract(&entry.tag_name, name)?,
    };

    let release = if entry.prerelease && release.is_stable() {
        release.with_channel(Channel::Unstable)
    } else {
        release
    };

    Ok(match entry.published_at {
        Some(date) => release.with_date(date),
        None => release,
    })
}

/// Analyse every entry, skipping the ones without a recognizable version
pub fn analyse_feed(entries: &[FeedEntry], name: Option<&str>) -> Vec<Release> {
    entries
        .iter()
        .filter_map(|entry| {
            analyse_entry(entry, name)
                .inspect_err(|e| {
                    warn!("Skipping release '{}': {}", entry.tag_name, e);
                })
                .ok()
        })
        .collect()
}

/// Releases split by stability, newest first
#[derive(Debug, Clone, Default)]
pub struct ReleaseSummary {
    pub stable: Vec<Release>,
    pub prerelease: Vec<Release>,
}

impl ReleaseSummary {
    pub fn from_releases(releases: impl IntoIterator<Item = Release>) -> Self {
        let (mut stable, mut prerelease): (Vec<_>, Vec<_>) =
            releases.into_iter().partition(Release::is_stable);

        sort_newest_first(&mut stable);
        sort_newest_first(&mut prerelease);

        Self { stable, prerelease }
    }

    pub fn latest_stable(&self) -> Option<&Release> {
        self.stable.first()
    }

    pub fn latest_prerelease(&self) -> Option<&Release> {
        self.prerelease.first()
    }
}

/// Sort by date when every release has one, by version text otherwise.
///
/// `Release::compare` mixes both keys pairwise and is not a total order on a
/// list where only some releases are dated.
fn sort_newest_first(releases: &mut [Release]) {
    if releases.iter().all(|r| r.date().is_some()) {
        releases.sort_by(|a, b| b.date().cmp(&a.date()));
    } else {
        releases.sort_by(|a, b| compare_versions(b.text(), a.text()));
    }
}
