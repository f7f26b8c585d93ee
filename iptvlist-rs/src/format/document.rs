use serde::Serialize;
use smol_str::SmolStr;

use crate::format::M3uGroup;

/// Reference to another playlist, kept apart from the groups
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaylistBlock {
    pub name: SmolStr,
    pub url: SmolStr,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    #[serde(rename = "group_block")]
    Group(M3uGroup),
    #[serde(rename = "playlist_block")]
    Playlist(PlaylistBlock),
}

/// Parsed playlist: every group in first-seen order, then every playlist reference
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct M3uDocument {
    blocks: Vec<Block>,
}

impl M3uDocument {
    pub fn new(
        groups: impl IntoIterator<Item = M3uGroup>,
        playlists: impl IntoIterator<Item = PlaylistBlock>,
    ) -> Self {
        let blocks = groups
            .into_iter()
            .map(Block::Group)
            .chain(playlists.into_iter().map(Block::Playlist))
            .collect();

        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn groups(&self) -> impl Iterator<Item = &M3uGroup> {
        self.blocks.iter().filter_map(|x| match x {
            Block::Group(group) => Some(group),
            Block::Playlist(_) => None,
        })
    }

    pub fn playlists(&self) -> impl Iterator<Item = &PlaylistBlock> {
        self.blocks.iter().filter_map(|x| match x {
            Block::Playlist(playlist) => Some(playlist),
            Block::Group(_) => None,
        })
    }

    pub fn group(&self, title: &str) -> Option<&M3uGroup> {
        self.groups().find(|x| x.group_title == title)
    }

    /// Number of entries over all groups
    pub fn entry_count(&self) -> usize {
        self.groups().map(|x| x.items.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::format::M3uEntry;

    #[test]
    fn test_serialize_shape() {
        let mut group = M3uGroup::new("News");
        group.group_logo = "http://logo.png".into();
        group.items.push(M3uEntry {
            name: "A".into(),
            url: "http://a".into(),
            ..Default::default()
        });
        let document = M3uDocument::new(
            [group],
            [PlaylistBlock {
                name: "More".into(),
                url: "http://more.m3u".into(),
            }],
        );

        let value = serde_json::to_value(&document).unwrap();
        assert_eq!(
            value,
            json!([
                {
                    "type": "group_block",
                    "groupTitle": "News",
                    "groupLogo": "http://logo.png",
                    "items": [{
                        "name": "A",
                        "url": "http://a",
                        "imageUrl": "",
                        "tvgId": "",
                        "tvgName": "",
                        "licenseType": "",
                        "licenseKey": "",
                        "userAgent": "",
                        "referer": "",
                        "origin": "",
                        "webtoken": ""
                    }]
                },
                { "type": "playlist_block", "name": "More", "url": "http://more.m3u" }
            ])
        );
    }

    #[test]
    fn test_accessors() {
        let document = M3uDocument::new(
            [M3uGroup::new("A"), M3uGroup::new("B")],
            [PlaylistBlock::default()],
        );
        assert_eq!(document.blocks().len(), 3);
        assert_eq!(document.groups().count(), 2);
        assert_eq!(document.playlists().count(), 1);
        assert!(document.group("B").is_some());
        assert!(document.group("C").is_none());
        assert_eq!(document.entry_count(), 0);
        assert!(M3uDocument::default().is_empty());
    }
}
