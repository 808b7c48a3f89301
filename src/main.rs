use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;

mod catalog;
mod config;
mod endpoints;
mod logging;
mod render;
mod router;
mod types;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app_data = config::build_config()?;
    logging::init(app_data.log_level())?;

    let addr = "0.0.0.0";
    let port = app_data.port();
    let debug = app_data.debug();

    info!(
        "Serving add-ons from {}",
        app_data.manifest_path().display()
    );
    info!("Starting server on {}:{}", addr, port);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_data.clone()))
            .wrap(Logger::default())
            .service(endpoints::health::health)
            .service(endpoints::addons::resource())
    })
    .bind((addr, port))?;

    if debug {
        info!("Running in debug mode, using 1 thread.");
        server.workers(1).run().await?;
    } else {
        server.run().await?;
    }

    anyhow::Ok(())
}
