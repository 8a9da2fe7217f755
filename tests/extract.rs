//! Extraction tests over real-world release strings

use rstest::rstest;
use version_scrape::release::{Channel, ExtractError, extract};

#[rstest]
#[case("0.23", None, "0.23")]
#[case("0.23.5", None, "0.23.5")]
#[case("1.23.5.1.3.4", None, "1.23.5.1.3.4")]
#[case("foo 1.23.5 bar", None, "1.23.5")]
#[case("v123", None, "123")]
#[case("123", None, "123")]
#[case("1.23f", None, "1.23f")]
#[case("1.2-1", None, "1.2-1")]
#[case("1.2-12", None, "1.2-12")]
#[case("0.23.5-stable", None, "0.23.5")]
#[case("program 1.2", Some("program"), "1.2")]
#[case("program-1.2", Some("program"), "1.2")]
#[case("Program-1.2", Some("program"), "1.2")]
#[case("foo1.3", Some("foo"), "1.3")]
#[case("myapp-1.2.3.tar.gz", Some("myapp"), "1.2.3")]
#[case("v1_2_3", None, "1.2.3")]
#[case("1-2-3", None, "1.2.3")]
#[case("Version 4.2 final", None, "4.2")]
#[case("release-0.9.1", None, "0.9.1")]
fn extracts_stable_releases(
    #[case] input: &str,
    #[case] name: Option<&str>,
    #[case] expected: &str,
) {
    let release = extract(input, name).unwrap();

    assert_eq!(release.text(), expected);
    assert_eq!(release.channel(), Channel::Stable);
    assert!(release.is_stable());
}

#[rstest]
#[case("1.4alpha", None, Channel::Alpha, "1.4alpha")]
#[case("program 1.4alpha", Some("program"), Channel::Alpha, "1.4alpha")]
#[case("1.3beta", None, Channel::Beta, "1.3beta")]
#[case("1.3pre", None, Channel::Unstable, "1.3pre")]
#[case("1.3-preview1", None, Channel::Unstable, "1.3-preview1")]
#[case("1.3rc", None, Channel::Rc, "1.3rc")]
#[case("1.3rc1", None, Channel::Rc, "1.3rc1")]
#[case("1.4Alpha", None, Channel::Alpha, "1.4Alpha")]
#[case("1.4.beta", None, Channel::Beta, "1.4.beta")]
#[case("1.4-beta", None, Channel::Beta, "1.4-beta")]
#[case("1.4-beta1", None, Channel::Beta, "1.4-beta1")]
#[case("1.4-beta.1", None, Channel::Beta, "1.4-beta.1")]
#[case("1.4-beta-1", None, Channel::Beta, "1.4-beta-1")]
#[case("1.3b1", None, Channel::Beta, "1.3b1")]
#[case("1.5-dev", None, Channel::Unstable, "1.5-dev")]
#[case("Release 2.0 Beta 4", None, Channel::Beta, "2.0 Beta")]
fn extracts_unstable_releases(
    #[case] input: &str,
    #[case] name: Option<&str>,
    #[case] channel: Channel,
    #[case] expected: &str,
) {
    let release = extract(input, name).unwrap();

    assert_eq!(release.channel(), channel);
    assert_eq!(release.text(), expected);
    assert!(!release.is_stable());
}

#[rstest]
#[case("foo", None)]
#[case("foo1.3", None)]
#[case("1.3bar", None)]
#[case("1.3beta1.4", None)]
#[case("foo1.3bar", None)]
#[case("foo1.3bar", Some("foo"))]
#[case("1.2.3-1.3", None)]
#[case("2016-10-12", None)]
#[case("2.1.2017", None)]
#[case("foo 2015 bar", None)]
#[case("foo #871", None)]
#[case("RC1", None)]
#[case("1234567", None)]
#[case("nightly alpha build", None)]
#[case("", None)]
#[case("   ", None)]
fn rejects_strings_without_version(#[case] input: &str, #[case] name: Option<&str>) {
    assert_eq!(extract(input, name), Err(ExtractError::NoVersionFound));
}

#[rstest]
#[case("1.3beta 1.4-stable")]
#[case("1.0 beta rc 2")]
#[case("1.0b1 b2")]
fn rejects_ambiguous_stability(#[case] input: &str) {
    assert!(matches!(
        extract(input, None),
        Err(ExtractError::AmbiguousStability { .. })
    ));
}

#[rstest]
#[case("1.3 foo 2.3")]
#[case("upgrade 1.2 to 1.3")]
fn rejects_ambiguous_version_number(#[case] input: &str) {
    assert!(matches!(
        extract(input, None),
        Err(ExtractError::AmbiguousVersionNumber { .. })
    ));
}

#[test]
fn repeated_version_number_is_not_ambiguous() {
    let release = extract("1.2 and again 1.2", None).unwrap();
    assert_eq!(release.text(), "1.2");
}
