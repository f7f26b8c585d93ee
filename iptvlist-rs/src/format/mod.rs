mod attributes;
mod document;
mod entry;
mod group;

pub use attributes::*;
pub use document::*;
pub use entry::*;
pub use group::*;

pub mod directives {
    pub const EXTM3U: &str = "#EXTM3U";
    pub const EXTINF: &str = "#EXTINF";
    pub const LICENSE_TYPE: &str = "#KODIPROP:inputstream.adaptive.license_type";
    pub const LICENSE_KEY: &str = "#KODIPROP:inputstream.adaptive.license_key";
    pub const USER_AGENT: &str = "#EXTVLCOPT:http-user-agent";
    /// Misspelled form, still the most common one in the wild
    pub const REFERRER: &str = "#EXTVLCOPT:http-referrer";
    pub const REFERER: &str = "#EXTVLCOPT:http-referer";

    pub const COMMENT: char = '#';
    pub const PARAM_SEPARATOR: char = '|';
}
