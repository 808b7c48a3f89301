use std::path::{Path, PathBuf};

#[derive(Clone, Debug)]
pub struct AppData {
    manifest_path: PathBuf,
    content_dir: PathBuf,
    site_name: String,
    log_level: String,
    port: u16,
    debug: bool,
}

pub fn build_config() -> anyhow::Result<AppData> {
    let manifest_path = dotenvy::var("ADDONS_MANIFEST")
        .unwrap_or("plugins/addonrepository/addons.xml".to_string());
    let content_dir = dotenvy::var("CONTENT_DIR").unwrap_or("plugins".to_string());
    let site_name = dotenvy::var("SITE_NAME").unwrap_or("Doomsday Engine".to_string());
    let log_level = dotenvy::var("LOG_LEVEL").unwrap_or("info".to_string());
    let port = dotenvy::var("PORT")
        .unwrap_or("8080".to_string())
        .parse::<u16>()
        .unwrap_or(8080);
    let debug = dotenvy::var("APP_DEBUG").unwrap_or("0".to_string()) == "1";

    let mut data = AppData::new(manifest_path, content_dir);
    data.site_name = site_name;
    data.log_level = log_level;
    data.port = port;
    data.debug = debug;

    Ok(data)
}

impl AppData {
    pub fn new(manifest_path: impl Into<PathBuf>, content_dir: impl Into<PathBuf>) -> Self {
        AppData {
            manifest_path: manifest_path.into(),
            content_dir: content_dir.into(),
            site_name: "Doomsday Engine".to_string(),
            log_level: "info".to_string(),
            port: 8080,
            debug: false,
        }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    pub fn content_dir(&self) -> &Path {
        &self.content_dir
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn log_level(&self) -> &str {
        &self.log_level
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn debug(&self) -> bool {
        self.debug
    }
}
