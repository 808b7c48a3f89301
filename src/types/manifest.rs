use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::ops::Range;
use std::path::{Path, PathBuf};

use quick_xml::events::Event;
use quick_xml::Reader;
use serde::Deserialize;

use super::models::{addon::Addon, game_mode::GameFamily};

#[derive(thiserror::Error, Debug)]
pub enum ManifestError {
    #[error("Couldn't read add-on manifest {path}: {source}")]
    Missing {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid add-on manifest: {0}")]
    Parse(#[from] ManifestParseError),
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ManifestParseError {
    #[error("malformed XML at line {line}, column {column}{}: {message}", entry_suffix(.entry))]
    Xml {
        line: usize,
        column: usize,
        entry: Option<usize>,
        message: String,
    },
    #[error("entry #{entry}{} is missing required field '{field}'", identifier_suffix(.identifier))]
    MissingField {
        entry: usize,
        identifier: Option<String>,
        field: &'static str,
    },
    #[error("identifier '{0}' is used by more than one entry")]
    DuplicateIdentifier(String),
    #[error("entry '{identifier}' has invalid featured flag '{value}'")]
    InvalidFeatured { identifier: String, value: String },
}

fn identifier_suffix(identifier: &Option<String>) -> String {
    match identifier {
        Some(id) => format!(" ('{}')", id),
        None => String::new(),
    }
}

fn entry_suffix(entry: &Option<usize>) -> String {
    match entry {
        Some(entry) => format!(" (entry #{})", entry),
        None => String::new(),
    }
}

#[derive(Debug, Deserialize)]
struct AddonXml {
    identifier: Option<String>,
    title: Option<String>,
    version: Option<String>,
    description: Option<String>,
    notes: Option<String>,
    #[serde(rename = "downloaduri")]
    download_uri: Option<String>,
    #[serde(rename = "homepageuri")]
    homepage_uri: Option<String>,
    featured: Option<String>,
    games: Option<GamesXml>,
    badge: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct GamesXml {
    #[serde(rename = "game", default)]
    modes: Vec<String>,
}

/// Reads and parses the manifest at `path`.
pub fn load(path: &Path) -> Result<BTreeMap<String, Addon>, ManifestError> {
    let xml = std::fs::read_to_string(path)
        .inspect_err(|e| log::error!("Failed to read {}: {}", path.display(), e))
        .map_err(|source| ManifestError::Missing {
            path: path.to_path_buf(),
            source,
        })?;

    parse(&xml)
        .inspect_err(|e| log::error!("Failed to parse {}: {}", path.display(), e))
        .map_err(ManifestError::from)
}

/// Parses manifest XML into add-ons keyed by identifier.
///
/// A bad entry fails the whole manifest; nothing is returned partially.
pub fn parse(xml: &str) -> Result<BTreeMap<String, Addon>, ManifestParseError> {
    let spans = scan_entries(xml)?;

    let mut ret: BTreeMap<String, Addon> = BTreeMap::new();
    for (i, span) in spans.into_iter().enumerate() {
        let entry: AddonXml = quick_xml::de::from_str(&xml[span.clone()])
            .map_err(|e| xml_error(xml, span.start, Some(i + 1), e.to_string()))?;
        let addon = entry.into_addon(i + 1)?;

        match ret.entry(addon.identifier.clone()) {
            Entry::Occupied(e) => {
                return Err(ManifestParseError::DuplicateIdentifier(e.key().clone()));
            }
            Entry::Vacant(e) => {
                e.insert(addon);
            }
        }
    }

    Ok(ret)
}

/// Checks the document is well-formed with an `<addons>` document element
/// and returns the byte range of every `<addon>` directly inside it.
fn scan_entries(xml: &str) -> Result<Vec<Range<usize>>, ManifestParseError> {
    let mut reader = Reader::from_str(xml);
    let mut depth = 0usize;
    let mut root_seen = false;
    let mut root_closed = false;
    let mut entry_start: Option<usize> = None;
    let mut entries: Vec<Range<usize>> = vec![];

    loop {
        let start = reader.buffer_position() as usize;
        let entry = entry_start.map(|_| entries.len() + 1);
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(e) => {
                let pos = reader.error_position() as usize;
                return Err(xml_error(xml, pos, entry, e.to_string()));
            }
        };

        match event {
            Event::Start(e) => {
                if depth == 0 {
                    check_root(xml, start, root_closed, e.name().as_ref())?;
                    root_seen = true;
                } else if depth == 1 && e.name().as_ref() == b"addon" {
                    entry_start = Some(start);
                }
                depth += 1;
            }
            Event::Empty(e) => {
                if depth == 0 {
                    check_root(xml, start, root_closed, e.name().as_ref())?;
                    root_seen = true;
                    root_closed = true;
                } else if depth == 1 && e.name().as_ref() == b"addon" {
                    entries.push(start..reader.buffer_position() as usize);
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(xml_error(xml, start, None, "unmatched end tag".into()));
                }
                depth -= 1;
                if depth == 1 {
                    if let Some(entry_start) = entry_start.take() {
                        entries.push(entry_start..reader.buffer_position() as usize);
                    }
                } else if depth == 0 {
                    root_closed = true;
                }
            }
            Event::Text(t) if depth == 0 => {
                if !t.iter().all(u8::is_ascii_whitespace) {
                    return Err(xml_error(
                        xml,
                        start,
                        None,
                        "text outside the document element".into(),
                    ));
                }
            }
            Event::CData(_) if depth == 0 => {
                return Err(xml_error(
                    xml,
                    start,
                    None,
                    "CDATA outside the document element".into(),
                ));
            }
            Event::Eof => {
                if depth > 0 {
                    return Err(xml_error(
                        xml,
                        start,
                        entry,
                        "document ends inside an open element".into(),
                    ));
                }
                if !root_seen {
                    return Err(xml_error(xml, start, None, "no document element".into()));
                }
                break;
            }
            _ => {}
        }
    }

    Ok(entries)
}

fn check_root(
    xml: &str,
    pos: usize,
    root_closed: bool,
    name: &[u8],
) -> Result<(), ManifestParseError> {
    if root_closed {
        return Err(xml_error(
            xml,
            pos,
            None,
            "content after the document element".into(),
        ));
    }
    if name != b"addons" {
        return Err(xml_error(
            xml,
            pos,
            None,
            format!(
                "document element must be <addons>, found <{}>",
                String::from_utf8_lossy(name)
            ),
        ));
    }
    Ok(())
}

/// Builds an XML error located at byte offset `pos` of `xml`.
fn xml_error(xml: &str, pos: usize, entry: Option<usize>, message: String) -> ManifestParseError {
    let before = &xml.as_bytes()[..pos.min(xml.len())];
    let line = before.iter().filter(|b| **b == b'\n').count() + 1;
    let column = before.iter().rev().take_while(|b| **b != b'\n').count() + 1;

    ManifestParseError::Xml {
        line,
        column,
        entry,
        message,
    }
}

impl AddonXml {
    fn into_addon(self, entry: usize) -> Result<Addon, ManifestParseError> {
        let identifier = present(self.identifier).ok_or(ManifestParseError::MissingField {
            entry,
            identifier: None,
            field: "identifier",
        })?;
        let title = present(self.title).ok_or_else(|| ManifestParseError::MissingField {
            entry,
            identifier: Some(identifier.clone()),
            field: "title",
        })?;

        // An empty <featured/> element counts as a set flag.
        let featured = match self.featured.as_deref().map(str::trim) {
            None => false,
            Some("") => true,
            Some(value) => parse_flag(value).ok_or_else(|| ManifestParseError::InvalidFeatured {
                identifier: identifier.clone(),
                value: value.to_string(),
            })?,
        };

        let mut addon = Addon::new(&identifier, &title);
        addon.version = present(self.version);
        addon.description = present(self.description);
        addon.notes = present(self.notes);
        addon.download_uri = present(self.download_uri);
        addon.homepage_uri = present(self.homepage_uri);
        addon.featured = featured;
        addon.badge = present(self.badge);
        addon.game_modes = self
            .games
            .unwrap_or_default()
            .modes
            .into_iter()
            .map(|mode| mode.trim().to_lowercase())
            .filter(|mode| !mode.is_empty())
            .collect();

        if addon.game_modes.is_empty() {
            log::warn!(
                "Add-on '{}' declares no game modes and is only listed if featured",
                addon.identifier
            );
        }
        for mode in &addon.game_modes {
            if GameFamily::of_game_mode(mode).is_none() {
                log::warn!(
                    "Add-on '{}' declares unknown game mode '{}'",
                    addon.identifier,
                    mode
                );
            }
        }

        Ok(addon)
    }
}

/// Trimmed text of an optional element; blank text counts as absent.
fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
