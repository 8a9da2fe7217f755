//! Three-way comparison of dotted version strings
//!
//! Versions are split into runs of ASCII digits and runs of letters; every
//! other character (`.`, `-`, `_`, spaces) only separates runs. Runs are
//! compared left to right:
//!
//! - numbers compare numerically (`1.10` > `1.9`, `01` == `1`)
//! - letters compare case-insensitively (`1.0Beta` == `1.0beta`)
//! - a letter run sorts before the end of the version, which sorts before a
//!   number (`1.0beta` < `1.0` < `1.0.1`)
//!
//! Zero runs directly before a letter run or the end are ignored, so
//! `1.0` == `1.0.0` and `1.0beta` == `1.beta`.

use std::cmp::Ordering;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Letters(String),
    End,
    /// Digits with leading zeros removed, ordered by length first
    Number(usize, String),
}

/// Compare two version strings.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    if a == b {
        return Ordering::Equal;
    }

    let a_segments = segments(a);
    let b_segments = segments(b);

    a_segments
        .iter()
        .chain(std::iter::once(&Segment::End))
        .cmp(b_segments.iter().chain(std::iter::once(&Segment::End)))
}

fn segments(version: &str) -> Vec<Segment> {
    let mut result = Vec::new();
    let mut rest = version;

    loop {
        rest = rest.trim_start_matches(|c: char| !c.is_ascii_digit() && !c.is_alphabetic());
        let Some(first) = rest.chars().next() else {
            break;
        };

        if first.is_ascii_digit() {
            let end = rest
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(rest.len());
            let digits = rest[..end].trim_start_matches('0');
            result.push(Segment::Number(digits.len(), digits.to_string()));
            rest = &rest[end..];
        } else {
            let end = rest
                .find(|c: char| !c.is_alphabetic())
                .unwrap_or(rest.len());
            result.push(Segment::Letters(rest[..end].to_lowercase()));
            rest = &rest[end..];
        }
    }

    let mut padded = true;
    let mut trimmed: Vec<Segment> = result
        .into_iter()
        .rev()
        .filter(|segment| {
            if padded && matches!(segment, Segment::Number(0, _)) {
                return false;
            }
            padded = matches!(segment, Segment::Letters(_));
            true
        })
        .collect();
    trimmed.reverse();

    trimmed
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1.2.3", "1.2.3", Ordering::Equal)]
    #[case("1.0", "1.0.0", Ordering::Equal)]
    #[case("1.0beta", "1.0.0-beta", Ordering::Equal)]
    #[case("1.0.1", "1.0.0.1", Ordering::Greater)]
    #[case("1.01", "1.1", Ordering::Equal)]
    #[case("1.4Alpha", "1.4alpha", Ordering::Equal)]
    #[case("1.2", "1.10", Ordering::Less)]
    #[case("1.10", "1.9", Ordering::Greater)]
    #[case("1.2.3", "1.2", Ordering::Greater)]
    #[case("1.0-beta", "1.0", Ordering::Less)]
    #[case("1.0-beta", "1.0-beta2", Ordering::Less)]
    #[case("1.0-alpha", "1.0-beta", Ordering::Less)]
    #[case("1.0rc1", "1.0.1", Ordering::Less)]
    #[case("1.2-1", "1.2", Ordering::Greater)]
    #[case("1.23f", "1.23", Ordering::Less)]
    #[case("2.0 Beta", "2.0.beta", Ordering::Equal)]
    #[case("123456789012345678901234567890", "9", Ordering::Greater)]
    fn compare_versions_returns_expected(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b), expected);
        assert_eq!(compare_versions(b, a), expected.reverse());
    }

    #[test]
    fn compare_versions_is_transitive_over_sorted_list() {
        let mut versions = vec![
            "1.10", "1.2", "1.2-beta", "1.2.0", "1.2rc1", "0.9", "1.2-1", "1.2alpha",
        ];
        versions.sort_by(|a, b| compare_versions(a, b));

        for window in versions.windows(2) {
            assert_ne!(compare_versions(window[0], window[1]), Ordering::Greater);
        }
        for (i, a) in versions.iter().enumerate() {
            for b in &versions[i..] {
                assert_ne!(compare_versions(a, b), Ordering::Greater, "{a} > {b}");
            }
        }
    }
}
