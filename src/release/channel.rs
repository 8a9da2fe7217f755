//! Stability channels

use std::fmt;

/// Stability classification of a release
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Channel {
    #[default]
    Stable,
    Beta,
    Alpha,
    Rc,
    /// Any recognized pre-release keyword outside the named channels (pre, dev, ...)
    Unstable,
}

impl Channel {
    /// Returns the string representation of the channel
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Stable => "stable",
            Channel::Beta => "beta",
            Channel::Alpha => "alpha",
            Channel::Rc => "rc",
            Channel::Unstable => "unstable",
        }
    }

    /// Canonicalize a stability keyword found in the input.
    ///
    /// Keywords starting with `b` (`beta`, `b2`) map to [`Channel::Beta`];
    /// keywords outside the closed set map to [`Channel::Unstable`].
    pub fn from_keyword(keyword: &str) -> Self {
        let keyword = keyword.to_lowercase();
        if keyword.starts_with('b') {
            return Channel::Beta;
        }
        keyword.parse().unwrap_or(Channel::Unstable)
    }

    pub fn is_stable(&self) -> bool {
        *self == Channel::Stable
    }
}

impl std::str::FromStr for Channel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stable" => Ok(Channel::Stable),
            "beta" => Ok(Channel::Beta),
            "alpha" => Ok(Channel::Alpha),
            "rc" => Ok(Channel::Rc),
            "unstable" => Ok(Channel::Unstable),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
