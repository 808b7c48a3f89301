//! HTML for the add-ons page.
//!
//! The page lists every featured add-on as a badge, then one table per game
//! family. Everything is rendered from a title-sorted view of the catalog, so
//! the filters only ever drop rows and never reorder them.

use maud::{html, Markup};

use crate::catalog::{self, Catalog, FeaturedFilter};
use crate::types::models::{addon::Addon, game_mode::GameFamily};

pub mod shell;

use shell::PageShell;

pub const PAGE_TITLE: &str = "Add-ons";
/// Key the site shell uses for the page.
pub const PAGE_KEY: &str = "addons";
/// Owner of the page's static content blocks.
pub const PLUGIN_NAME: &str = "addonrepository";

pub fn addons_page(catalog: &Catalog, shell: &dyn PageShell) -> Markup {
    let addons = catalog.sorted_by_title();
    if catalog.is_empty() {
        log::warn!("The add-on manifest lists no add-ons");
    }
    log::debug!("Rendering {} add-ons", catalog.len());

    let body = html! {
        div id="contentbox" class="addons" {
            (shell.content_block("overview", PLUGIN_NAME))
            (featured_addons(&addons))
            @for family in GameFamily::ALL {
                (family_section(family, &addons))
            }
        }
    };

    shell.page(PAGE_TITLE, PAGE_KEY, body)
}

pub fn featured_addons(addons: &[&Addon]) -> Markup {
    html! {
        div class="block" {
            div class="addons_list" {
                @for addon in catalog::filter_by_featured(addons, FeaturedFilter::Featured) {
                    (addon.download_badge())
                }
            }
        }
    }
}

pub fn family_section(family: GameFamily, addons: &[&Addon]) -> Markup {
    html! {
        div class="block" {
            article {
                h1 { (family.name()) }
                p { (family_intro(family)) }
                (addon_table(addons, family.game_modes(), FeaturedFilter::Any))
            }
        }
    }
}

fn family_intro(family: GameFamily) -> Markup {
    let game_link = html! {
        a href=(family.home_path()) title={ "Tell me more about " (family.name()) } {
            (family.name())
        }
    };

    match family {
        GameFamily::Doom => html! {
            "The following add-ons are for use with " (game_link)
            " or a variant of it such as " strong { "DOOM2" } " and "
            strong { "Final Doom: The Plutonia Experiment" } "."
        },
        GameFamily::Heretic => html! {
            "The following add-ons are for use with " (game_link) " and the "
            strong { "Shadow of the Serpent Riders" } " expansion pack."
        },
        GameFamily::Hexen => html! {
            "The following add-ons are for use with " (game_link) " and the "
            strong { "Deathkings of the Dark Citadel" } " expansion pack."
        },
    }
}

pub fn addon_table(addons: &[&Addon], game_modes: &[&str], featured: FeaturedFilter) -> Markup {
    let matching = catalog::filter_by_game_modes(addons, game_modes);
    let rows = catalog::filter_by_featured(&matching, featured);

    html! {
        table class="directory" {
            thead {
                tr {
                    th { label title="Package Name" { "Name" } }
                    th style="width:50%" { label title="Package Description" { "Description" } }
                    th { label title="Package Notes" { "Notes" } }
                }
            }
            @for addon in rows {
                (addon_row(addon))
            }
        }
    }
}

pub fn addon_row(addon: &Addon) -> Markup {
    let title = addon.display_title();

    html! {
        tr {
            td {
                @match addon.link() {
                    Some(link) => {
                        a href=(link.uri()) title=(link.tooltip(&title)) rel="nofollow" { (title) }
                    }
                    None => { (title) }
                }
            }
            td {
                @if let Some(description) = &addon.description {
                    (description)
                }
            }
            td {
                @if let Some(notes) = &addon.notes {
                    (notes)
                }
            }
        }
    }
}
