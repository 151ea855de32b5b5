pub mod app;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod provider;
pub mod query;
pub mod state;
pub mod web;

pub use config::Config;
pub use error::{Error, Result};
