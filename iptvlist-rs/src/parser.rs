use std::{
    collections::HashMap,
    error::Error,
    fmt::Display,
    io::{self, BufRead},
    mem::replace,
};

use log::{debug, trace};
use smol_str::SmolStr;

use crate::{
    classifier::{Line, classify},
    format::{
        M3uDocument, M3uEntry, M3uGroup, Override, PendingAttributes, PlaylistBlock, directives,
        parse_attributes,
    },
};

/// Title of the group holding entries declared before any `group-title`
pub const DEFAULT_GROUP: &str = "Sin Grupo";
/// Name of a playlist reference declared without a name
pub const DEFAULT_PLAYLIST_NAME: &str = "Playlist";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    pub default_group: SmolStr,
    pub default_playlist_name: SmolStr,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            default_group: DEFAULT_GROUP.into(),
            default_playlist_name: DEFAULT_PLAYLIST_NAME.into(),
        }
    }
}

pub struct Parser(Box<dyn ParserImplTrait>);

impl Parser {
    pub fn new<T: BufRead + 'static>(reader: T) -> Self {
        Self::with_options(reader, ParserOptions::default())
    }

    pub fn with_options<T: BufRead + 'static>(reader: T, options: ParserOptions) -> Self {
        Self(Box::new(ParserImpl::new(reader, options)))
    }

    pub fn parse(&mut self) -> Result<(), ParseError> {
        self.0.parse()
    }

    pub fn get_result(&mut self) -> M3uDocument {
        self.0.get_result()
    }
}

#[derive(Debug)]
pub enum ParseError {
    IoError(io::Error),
}

impl Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Self::IoError(e) => write!(f, "Failed to read playlist: {}", e),
        }
    }
}

impl Error for ParseError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match &self {
            Self::IoError(e) => Some(e),
        }
    }
}

impl From<io::Error> for ParseError {
    fn from(value: io::Error) -> Self {
        Self::IoError(value)
    }
}

/// Parse lines that are already in memory
pub fn parse_lines<I, S>(lines: I, options: &ParserOptions) -> M3uDocument
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut state = ParserState::new(options.clone());
    for line in lines {
        state.feed(line.as_ref().trim());
    }

    state.finish()
}

trait ParserImplTrait {
    fn parse(&mut self) -> Result<(), ParseError>;
    fn get_result(&mut self) -> M3uDocument;
}

struct ParserImpl<T: BufRead + 'static> {
    reader: T,
    buffer: String,
    state: ParserState,
}

impl<T: BufRead + 'static> ParserImpl<T> {
    pub fn new(reader: T, options: ParserOptions) -> Self {
        Self {
            reader,
            buffer: String::new(),
            state: ParserState::new(options),
        }
    }

    fn next_line(&mut self) -> Result<Option<String>, io::Error> {
        loop {
            self.buffer.clear();
            match self.reader.read_line(&mut self.buffer) {
                Ok(0) => return Ok(None),
                Ok(_) => {}
                Err(e) => return Err(e),
            }

            if !self.buffer.trim().is_empty() {
                return Ok(Some(self.buffer.trim().to_owned()));
            }
        }
    }
}

impl<T: BufRead + 'static> ParserImplTrait for ParserImpl<T> {
    fn parse(&mut self) -> Result<(), ParseError> {
        while let Some(line) = self.next_line()? {
            self.state.feed(&line);
        }

        Ok(())
    }

    fn get_result(&mut self) -> M3uDocument {
        let options = self.state.options.clone();
        replace(&mut self.state, ParserState::new(options)).finish()
    }
}

/// Entry between its `#EXTINF` and its location line
struct OpenEntry {
    entry: M3uEntry,
    name: Option<SmolStr>,
    is_playlist: bool,
}

struct ParserState {
    options: ParserOptions,
    group_title: SmolStr,
    group_logo: SmolStr,
    open: Option<OpenEntry>,
    pending: PendingAttributes,
    groups: Vec<M3uGroup>,
    group_indices: HashMap<SmolStr, usize>,
    playlists: Vec<PlaylistBlock>,
}

impl ParserState {
    fn new(options: ParserOptions) -> Self {
        Self {
            group_title: options.default_group.clone(),
            group_logo: SmolStr::default(),
            options,
            open: None,
            pending: PendingAttributes::default(),
            groups: Vec::new(),
            group_indices: HashMap::new(),
            playlists: Vec::new(),
        }
    }

    fn feed(&mut self, line: &str) {
        match classify(line) {
            Line::Header | Line::Blank => {}
            Line::Directive(field, value) => self.apply_directive(field, value),
            Line::EntryInfo(line) => self.open_entry(line),
            Line::Location(location) => match self.open.take() {
                Some(open) => self.close_entry(open, location),
                None => trace!("Ignore location without entry: {}", location),
            },
            Line::Unknown(line) => trace!("Ignore directive: {}", line),
        }
    }

    fn apply_directive(&mut self, field: Override, value: SmolStr) {
        match self.open.as_mut() {
            Some(open) => open.entry.set(field, value),
            None => self.pending.set(field, value),
        }
    }

    fn open_entry(&mut self, line: &str) {
        if let Some(dropped) = self.open.take() {
            debug!("Drop entry {:?} without location", dropped.name);
        }

        let mut entry = M3uEntry::default();
        self.pending.apply_to(&mut entry);

        let attributes = parse_attributes(line);
        if attributes.is_group_header() {
            self.group_logo = attributes.group_logo.unwrap_or_default();
            debug!("Group header, logo of {} is {}", self.group_title, self.group_logo);
            return;
        }

        let is_playlist = attributes.is_playlist();
        if let Some(title) = attributes.group_title {
            self.group_title = title;
            if let Some(logo) = attributes.group_logo {
                self.group_logo = logo;
            }
        }

        entry.tvg_id = attributes.tvg_id.unwrap_or_default();
        entry.tvg_name = attributes.tvg_name.unwrap_or_default();
        entry.image_url = attributes.tvg_logo.unwrap_or_default();

        self.open = Some(OpenEntry {
            entry,
            name: display_name(line),
            is_playlist,
        });
    }

    fn close_entry(&mut self, open: OpenEntry, location: &str) {
        if open.is_playlist {
            self.playlists.push(PlaylistBlock {
                name: open
                    .name
                    .unwrap_or_else(|| self.options.default_playlist_name.clone()),
                url: location.into(),
            });
            return;
        }

        let mut entry = open.entry;
        entry.name = open.name.unwrap_or_default();

        let mut segments = location.split(directives::PARAM_SEPARATOR);
        entry.url = segments.next().unwrap_or_default().into();
        for segment in segments {
            let Some((key, value)) = segment.split_once('=') else {
                continue;
            };

            match Override::from_param(&key.trim().to_lowercase()) {
                Some(field) => entry.set(field, value.into()),
                None => trace!("Ignore location parameter {}", key),
            }
        }

        self.file_entry(entry);
    }

    fn file_entry(&mut self, entry: M3uEntry) {
        let index = match self.group_indices.get(&self.group_title) {
            Some(index) => *index,
            None => {
                self.groups.push(M3uGroup::new(self.group_title.clone()));
                self.group_indices
                    .insert(self.group_title.clone(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };

        let group = &mut self.groups[index];
        group.group_logo = self.group_logo.clone();
        group.items.push(entry);
    }

    fn finish(self) -> M3uDocument {
        if let Some(dropped) = self.open {
            debug!("Drop entry {:?} without location", dropped.name);
        }

        M3uDocument::new(self.groups, self.playlists)
    }
}

/// Text after the last comma, `None` when missing or blank
fn display_name(line: &str) -> Option<SmolStr> {
    line.rsplit_once(',')
        .map(|(_, name)| name.trim())
        .filter(|name| !name.is_empty())
        .map(SmolStr::from)
}
