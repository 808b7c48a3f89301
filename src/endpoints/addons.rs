use actix_web::{guard, web, Resource};
use maud::Markup;

use crate::catalog::Catalog;
use crate::config::AppData;
use crate::endpoints::ApiError;
use crate::render::{self, shell::SiteShell};
use crate::router;
use crate::types::manifest;

/// The add-ons page, claiming every GET whose path the router accepts.
pub fn resource() -> Resource {
    web::resource("/{path:.*}")
        .guard(guard::Get())
        .guard(guard::fn_guard(|ctx| {
            router::interpret_request(ctx.head().uri.path())
        }))
        .to(index)
}

pub async fn index(data: web::Data<AppData>) -> Result<Markup, ApiError> {
    let data = data.into_inner();
    let page = web::block(move || build_page(&data)).await??;
    Ok(page)
}

fn build_page(data: &AppData) -> Result<Markup, ApiError> {
    let addons = manifest::load(data.manifest_path())?;
    let catalog = Catalog::new(addons).inspect_err(|e| log::error!("{}", e))?;
    let shell = SiteShell::new(data);

    Ok(render::addons_page(&catalog, &shell))
}
