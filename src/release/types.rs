//! The `Release` value and its ordering

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, Utc};

use crate::release::channel::Channel;
use crate::release::dotted::compare_versions;

/// A version identifier extracted from free-form text
///
/// Created by [`extract`](crate::release::extract); never mutated afterwards
/// apart from attaching a publication date with [`Release::with_date`].
#[derive(Debug, Clone)]
pub struct Release {
    text: String,
    channel: Channel,
    date: Option<DateTime<Utc>>,
}

impl Release {
    pub(crate) fn new(text: String, channel: Channel) -> Self {
        debug_assert!(!text.trim().is_empty());
        Self {
            text,
            channel,
            date: None,
        }
    }

    /// Attach an externally known publication date.
    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub(crate) fn with_channel(mut self, channel: Channel) -> Self {
        self.channel = channel;
        self
    }

    /// The extracted version text, e.g. `1.4.2` or `1.4-beta1`
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn channel(&self) -> Channel {
        self.channel
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    pub fn is_stable(&self) -> bool {
        self.channel.is_stable()
    }

    /// Three-way comparison used for sorting.
    ///
    /// Compares by date when both releases carry one, by version text otherwise.
    /// The channel does not take part; `1.0-beta` and `1.0` differ only through
    /// their text.
    ///
    /// Known limitation: the key is chosen per pair, so across a list where only
    /// some releases are dated this is not a total order and must not be handed
    /// to `sort_by`. Sort such lists by text alone (see
    /// [`ReleaseSummary`](crate::release::feed::ReleaseSummary)).
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.date, other.date) {
            (Some(a), Some(b)) => compare_by_date(a, b),
            _ => compare_by_text(&self.text, &other.text),
        }
    }

    /// Returns true if this release sorts after `other`
    pub fn is_newer_than(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Greater
    }
}

fn compare_by_date(a: DateTime<Utc>, b: DateTime<Utc>) -> Ordering {
    a.cmp(&b)
}

fn compare_by_text(a: &str, b: &str) -> Ordering {
    compare_versions(a, b)
}

impl PartialEq for Release {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal && self.channel == other.channel
    }
}

impl PartialOrd for Release {
    /// Same ordering as [`Release::compare`], except that releases which compare
    /// equal but sit on different channels are unordered.
    ///
    /// Known limitation: for such pairs (`1.0` and `1.0-beta` both without
    /// dates) `<`, `>`, `<=` and `>=` are all false. Use [`Release::compare`]
    /// when `<=` should hold for them.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.compare(other) {
            Ordering::Equal if self.channel != other.channel => None,
            ordering => Some(ordering),
        }
    }
}

impl fmt::Display for Release {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.text, self.channel)
    }
}
