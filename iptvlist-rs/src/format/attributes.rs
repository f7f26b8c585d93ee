use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

lazy_static! {
    static ref ATTRIBUTE_REGEX: Regex =
        Regex::new("([a-zA-Z-]+)=\"([^\"]*)\"").expect("Regular expression error");
}

/// Recognized `key="value"` attributes of an `#EXTINF` line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryAttributes {
    pub group_title: Option<SmolStr>,
    pub group_logo: Option<SmolStr>,
    pub tvg_id: Option<SmolStr>,
    pub tvg_name: Option<SmolStr>,
    pub tvg_logo: Option<SmolStr>,
    /// Value of `type`
    pub kind: Option<SmolStr>,
}

impl EntryAttributes {
    /// A line carrying only group artwork announces the group, it does not declare an entry
    pub fn is_group_header(&self) -> bool {
        self.group_logo.is_some() && self.group_title.is_none()
    }

    pub fn is_playlist(&self) -> bool {
        self.kind.as_deref() == Some("playlist")
    }
}

/// Unknown keys are dropped, a repeated key keeps its last value
pub fn parse_attributes(input: impl AsRef<str>) -> EntryAttributes {
    let mut result = EntryAttributes::default();
    for (_, [key, value]) in ATTRIBUTE_REGEX
        .captures_iter(input.as_ref())
        .map(|x| x.extract())
    {
        let slot = match key {
            "group-title" => &mut result.group_title,
            "group-logo" => &mut result.group_logo,
            "tvg-id" => &mut result.tvg_id,
            "tvg-name" => &mut result.tvg_name,
            "tvg-logo" => &mut result.tvg_logo,
            "type" => &mut result.kind,
            _ => continue,
        };
        *slot = Some(value.into());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_attributes() {
        let result = parse_attributes(
            r#"#EXTINF:-1 tvg-id="a.es" tvg-name="A" tvg-logo="http://l/a.png" group-title="News",A"#,
        );
        assert_eq!(result.tvg_id.as_deref(), Some("a.es"));
        assert_eq!(result.tvg_name.as_deref(), Some("A"));
        assert_eq!(result.tvg_logo.as_deref(), Some("http://l/a.png"));
        assert_eq!(result.group_title.as_deref(), Some("News"));
        assert!(result.group_logo.is_none());
        assert!(!result.is_group_header());
        assert!(!result.is_playlist());
    }

    #[test]
    fn test_unknown_and_case_sensitive_keys() {
        let result = parse_attributes(r#"#EXTINF:-1 x-tvg-id="x" TVG-ID="y" catchup="default",A"#);
        assert_eq!(result, EntryAttributes::default());
    }

    #[test]
    fn test_group_header() {
        let result = parse_attributes(r#"#EXTINF:-1 group-logo="http://logo.png","#);
        assert!(result.is_group_header());

        let result = parse_attributes(r#"#EXTINF:-1 group-logo="" group-title="",A"#);
        assert!(!result.is_group_header());
        assert_eq!(result.group_title.as_deref(), Some(""));
    }

    #[test]
    fn test_repeated_key_and_playlist() {
        let result = parse_attributes(r#"#EXTINF:-1 type="media" type="playlist",List"#);
        assert!(result.is_playlist());
    }

    #[test]
    fn test_value_is_taken_verbatim() {
        let result = parse_attributes(r#"#EXTINF:-1 group-title=" Sports, HD ",A"#);
        assert_eq!(result.group_title.as_deref(), Some(" Sports, HD "));
    }
}
