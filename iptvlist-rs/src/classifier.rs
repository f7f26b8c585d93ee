use smol_str::SmolStr;

use crate::format::{Override, directives};

/// Kind of a single trimmed playlist line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'a> {
    Header,
    /// Metadata directive with its extracted value
    Directive(Override, SmolStr),
    /// `#EXTINF` declaration, holding the whole line
    EntryInfo(&'a str),
    /// Anything not starting with `#`, only meaningful while an entry is open
    Location(&'a str),
    Blank,
    Unknown(&'a str),
}

const DIRECTIVES: [(&str, Override); 5] = [
    (directives::LICENSE_TYPE, Override::LicenseType),
    (directives::LICENSE_KEY, Override::LicenseKey),
    (directives::USER_AGENT, Override::UserAgent),
    (directives::REFERRER, Override::Referer),
    (directives::REFERER, Override::Referer),
];

/// Classify a line, the first matching rule wins
pub fn classify(line: &str) -> Line<'_> {
    if line.starts_with(directives::EXTM3U) {
        return Line::Header;
    }

    for (prefix, field) in DIRECTIVES {
        if line.starts_with(prefix) {
            return Line::Directive(field, directive_value(line));
        }
    }

    if line.starts_with(directives::EXTINF) {
        Line::EntryInfo(line)
    } else if line.is_empty() {
        Line::Blank
    } else if line.starts_with(directives::COMMENT) {
        Line::Unknown(line)
    } else {
        Line::Location(line)
    }
}

/// Text after the first `=`, trimmed; empty when there is none
pub fn directive_value(line: &str) -> SmolStr {
    line.split_once('=')
        .map(|(_, value)| value.trim().into())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_value() {
        assert_eq!(directive_value("#EXTVLCOPT:http-user-agent= UA/1.0 "), "UA/1.0");
        assert_eq!(
            directive_value("#KODIPROP:inputstream.adaptive.license_key=https://k?a=b"),
            "https://k?a=b"
        );
        assert_eq!(directive_value("#EXTVLCOPT:http-user-agent"), "");
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("#EXTM3U x-tvg-url=\"a\""), Line::Header);
        assert_eq!(
            classify("#KODIPROP:inputstream.adaptive.license_type=clearkey"),
            Line::Directive(Override::LicenseType, "clearkey".into())
        );
        assert_eq!(
            classify("#KODIPROP:inputstream.adaptive.license_key=1:2"),
            Line::Directive(Override::LicenseKey, "1:2".into())
        );
        assert_eq!(
            classify("#EXTVLCOPT:http-user-agent=UA"),
            Line::Directive(Override::UserAgent, "UA".into())
        );
        assert_eq!(classify("#EXTINF:-1,A"), Line::EntryInfo("#EXTINF:-1,A"));
        assert_eq!(classify("http://a"), Line::Location("http://a"));
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("#EXTGRP:News"), Line::Unknown("#EXTGRP:News"));
    }

    #[test]
    fn test_referer_aliases() {
        assert_eq!(
            classify("#EXTVLCOPT:http-referrer=http://r"),
            Line::Directive(Override::Referer, "http://r".into())
        );
        assert_eq!(
            classify("#EXTVLCOPT:http-referer=http://r"),
            Line::Directive(Override::Referer, "http://r".into())
        );
    }

    #[test]
    fn test_missing_equals() {
        assert_eq!(
            classify("#KODIPROP:inputstream.adaptive.license_type"),
            Line::Directive(Override::LicenseType, "".into())
        );
    }

    #[test]
    fn test_origin_directive_is_not_recognized() {
        assert_eq!(
            classify("#EXTVLCOPT:http-origin=http://o"),
            Line::Unknown("#EXTVLCOPT:http-origin=http://o")
        );
    }
}
