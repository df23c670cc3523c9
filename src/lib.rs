pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod render;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::Cli;

pub use crate::adapters::HttpBackend;
pub use config::{toml_config::TomlConfig, SiteConfig};
pub use crate::core::{contact::ContactFormViewModel, menu::MenuViewModel};
pub use utils::error::{FetchError, Result, SiteError, SubmitError};
