use serde::Serialize;
use smol_str::SmolStr;

/// A playable item of a group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct M3uEntry {
    /// Display name, the text after the last comma of `#EXTINF`
    pub name: SmolStr,
    /// Location without the `|` parameters
    pub url: SmolStr,
    /// Value of `tvg-logo`
    pub image_url: SmolStr,
    pub tvg_id: SmolStr,
    pub tvg_name: SmolStr,
    pub license_type: SmolStr,
    pub license_key: SmolStr,
    pub user_agent: SmolStr,
    pub referer: SmolStr,
    pub origin: SmolStr,
    pub webtoken: SmolStr,
}

/// Fields of an entry that can be set by directive lines or `|` parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Override {
    LicenseType,
    LicenseKey,
    UserAgent,
    Referer,
    Origin,
    Webtoken,
}

impl Override {
    pub const ALL: [Override; 6] = [
        Self::LicenseType,
        Self::LicenseKey,
        Self::UserAgent,
        Self::Referer,
        Self::Origin,
        Self::Webtoken,
    ];

    /// Match a parameter key of a location line, the key must be lower-cased
    pub fn from_param(key: &str) -> Option<Self> {
        match key {
            "user-agent" => Some(Self::UserAgent),
            "referer" => Some(Self::Referer),
            "origin" => Some(Self::Origin),
            "webtoken" => Some(Self::Webtoken),
            _ => None,
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl M3uEntry {
    pub fn get(&self, field: Override) -> &SmolStr {
        match field {
            Override::LicenseType => &self.license_type,
            Override::LicenseKey => &self.license_key,
            Override::UserAgent => &self.user_agent,
            Override::Referer => &self.referer,
            Override::Origin => &self.origin,
            Override::Webtoken => &self.webtoken,
        }
    }

    pub fn set(&mut self, field: Override, value: SmolStr) {
        let slot = match field {
            Override::LicenseType => &mut self.license_type,
            Override::LicenseKey => &mut self.license_key,
            Override::UserAgent => &mut self.user_agent,
            Override::Referer => &mut self.referer,
            Override::Origin => &mut self.origin,
            Override::Webtoken => &mut self.webtoken,
        };
        *slot = value;
    }
}

/// Directive values seen while no entry is open, handed to the next `#EXTINF`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingAttributes {
    values: [Option<SmolStr>; 6],
}

impl PendingAttributes {
    pub fn get(&self, field: Override) -> Option<&SmolStr> {
        self.values[field.index()].as_ref()
    }

    pub fn set(&mut self, field: Override, value: SmolStr) {
        self.values[field.index()] = Some(value);
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Move every non-empty value into `entry`, leaving nothing pending
    pub fn apply_to(&mut self, entry: &mut M3uEntry) {
        for field in Override::ALL {
            match self.values[field.index()].take() {
                Some(value) if !value.is_empty() => entry.set(field, value),
                _ => {}
            }
        }
    }
}
