pub mod manifest;
pub mod models;
