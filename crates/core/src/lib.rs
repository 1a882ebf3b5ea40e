pub mod catalog;
pub mod config;
pub mod error;
pub mod store;
pub mod types;

pub use config::{SiteConfig, parse_site_toml, parse_site_toml_str};
pub use error::{Error, Result};
pub use store::RecordStore;
pub use types::*;
