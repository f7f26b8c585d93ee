use serde::Serialize;
use smol_str::SmolStr;

use crate::format::M3uEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct M3uGroup {
    /// Value of `group-title`
    pub group_title: SmolStr,
    /// Group artwork that was active when the last entry was filed
    pub group_logo: SmolStr,
    /// Entries in source order
    pub items: Vec<M3uEntry>,
}

impl M3uGroup {
    pub fn new(title: impl Into<SmolStr>) -> Self {
        Self {
            group_title: title.into(),
            ..Default::default()
        }
    }
}
