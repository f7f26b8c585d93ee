use std::fmt::Display;

use crate::format::{Block, M3uDocument, M3uEntry, M3uGroup, Override, PlaylistBlock, directives};

impl Display for M3uDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", directives::EXTM3U)?;

        for block in self.blocks() {
            match block {
                Block::Group(group) => group.fmt(f)?,
                Block::Playlist(playlist) => playlist.fmt(f)?,
            }
        }

        Ok(())
    }
}

impl Display for M3uGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in self.items.iter() {
            write!(f, "\n{}:-1", directives::EXTINF)?;
            write_attribute(f, "tvg-id", &entry.tvg_id)?;
            write_attribute(f, "tvg-name", &entry.tvg_name)?;
            write_attribute(f, "tvg-logo", &entry.image_url)?;
            // group-logo is always written, an omitted one would keep the previous group's
            write!(
                f,
                " group-title=\"{}\" group-logo=\"{}\",{}\n",
                self.group_title, self.group_logo, entry.name
            )?;

            entry.fmt(f)?;
        }

        Ok(())
    }
}

/// Directives and location of an entry, written after its `#EXTINF`
impl Display for M3uEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (directive, field) in [
            (directives::LICENSE_TYPE, Override::LicenseType),
            (directives::LICENSE_KEY, Override::LicenseKey),
        ] {
            let value = self.get(field);
            if !value.is_empty() {
                writeln!(f, "{}={}", directive, value)?;
            }
        }

        // parameter values are read back untrimmed, directive values are not
        let mut location = self.url.to_string();
        for (key, field) in LOCATION_PARAMS {
            let value = self.get(field);
            if value.is_empty() {
                continue;
            }

            if value.contains(directives::PARAM_SEPARATOR) {
                let directive = match field {
                    Override::UserAgent => directives::USER_AGENT,
                    _ => directives::REFERRER,
                };
                writeln!(f, "{}={}", directive, value)?;
            } else {
                location.push(directives::PARAM_SEPARATOR);
                location.push_str(key);
                location.push('=');
                location.push_str(value);
            }
        }

        // an empty separator keeps the line non-blank and its trailing whitespace
        if location.is_empty() || location.ends_with(char::is_whitespace) {
            location.push(directives::PARAM_SEPARATOR);
        }
        writeln!(f, "{}", location)
    }
}

/// Only user-agent and referer can hold a separator, they come from directives then
const LOCATION_PARAMS: [(&str, Override); 4] = [
    ("user-agent", Override::UserAgent),
    ("referer", Override::Referer),
    ("origin", Override::Origin),
    ("webtoken", Override::Webtoken),
];

impl Display for PlaylistBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "\n{}:-1 type=\"playlist\",{}\n", directives::EXTINF, self.name)?;
        writeln!(f, "{}", self.url)
    }
}

fn write_attribute(
    f: &mut std::fmt::Formatter<'_>,
    key: &str,
    value: &str,
) -> std::fmt::Result {
    if !value.is_empty() {
        write!(f, " {}=\"{}\"", key, value)?;
    }

    Ok(())
}
