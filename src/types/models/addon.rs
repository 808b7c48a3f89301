use std::collections::BTreeSet;

use maud::{html, Markup, PreEscaped};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addon {
    pub identifier: String,
    pub title: String,
    pub version: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub download_uri: Option<String>,
    pub homepage_uri: Option<String>,
    pub featured: bool,
    pub game_modes: BTreeSet<String>,
    /// Badge markup supplied by the manifest. Trusted, emitted verbatim.
    pub badge: Option<String>,
}

/// Where the name of an add-on links to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddonLink<'a> {
    Download(&'a str),
    Homepage(&'a str),
}

impl AddonLink<'_> {
    pub fn uri(&self) -> &str {
        match self {
            AddonLink::Download(uri) | AddonLink::Homepage(uri) => uri,
        }
    }

    pub fn tooltip(&self, display_title: &str) -> String {
        match self {
            AddonLink::Download(_) => format!("Download '{}'", display_title),
            AddonLink::Homepage(_) => format!("Visit homepage for '{}'", display_title),
        }
    }
}

impl Addon {
    pub fn new(identifier: &str, title: &str) -> Addon {
        Addon {
            identifier: identifier.to_string(),
            title: title.to_string(),
            version: None,
            description: None,
            notes: None,
            download_uri: None,
            homepage_uri: None,
            featured: false,
            game_modes: BTreeSet::new(),
            badge: None,
        }
    }

    /// Title followed by the version, when there is one.
    pub fn display_title(&self) -> String {
        match self.version.as_deref() {
            Some(version) if !version.is_empty() => format!("{} {}", self.title, version),
            _ => self.title.clone(),
        }
    }

    /// The download link wins over the homepage.
    pub fn link(&self) -> Option<AddonLink<'_>> {
        if let Some(uri) = self.download_uri.as_deref() {
            return Some(AddonLink::Download(uri));
        }
        self.homepage_uri.as_deref().map(AddonLink::Homepage)
    }

    pub fn supports_any_game_mode(&self, modes: &[&str]) -> bool {
        modes.iter().any(|mode| self.game_modes.contains(*mode))
    }

    pub fn download_badge(&self) -> Markup {
        if let Some(badge) = &self.badge {
            return PreEscaped(badge.clone());
        }

        let label = html! {
            span class="title" { (self.title) }
            @if let Some(version) = self.version.as_deref().filter(|v| !v.is_empty()) {
                br;
                span class="version" { (version) }
            }
        };

        html! {
            div class="addon_badge" {
                @match self.link() {
                    Some(link) => {
                        a href=(link.uri()) title=(link.tooltip(&self.display_title())) rel="nofollow" {
                            (label)
                        }
                    }
                    None => { (label) }
                }
            }
        }
    }
}
