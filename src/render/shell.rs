use std::path::PathBuf;

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::config::AppData;

/// Site chrome around a page, plus the static content blocks pages pull in.
pub trait PageShell {
    fn page(&self, title: &str, page_key: &str, body: Markup) -> Markup;

    /// Static HTML block `name` belonging to `owner`. Empty when there is none.
    fn content_block(&self, name: &str, owner: &str) -> Markup;
}

pub struct SiteShell {
    site_name: String,
    content_dir: PathBuf,
}

impl SiteShell {
    pub fn new(data: &AppData) -> Self {
        SiteShell {
            site_name: data.site_name().to_string(),
            content_dir: data.content_dir().to_path_buf(),
        }
    }
}

impl PageShell for SiteShell {
    fn page(&self, title: &str, page_key: &str, body: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="utf-8";
                    title { (title) " | " (self.site_name) }
                }
                body id=(page_key) {
                    header id="header" {
                        h1 { a href="/" { (self.site_name) } }
                    }
                    (body)
                    footer id="footer" {
                        p { (self.site_name) }
                    }
                }
            }
        }
    }

    fn content_block(&self, name: &str, owner: &str) -> Markup {
        let path = self.content_dir.join(owner).join(format!("{}.html", name));
        match std::fs::read_to_string(&path) {
            Ok(content) => PreEscaped(content),
            Err(e) => {
                log::warn!("Content block {} unavailable: {}", path.display(), e);
                html! {}
            }
        }
    }
}
