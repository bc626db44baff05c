pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::LocalStorage;
#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::toml_config::TomlConfig;

pub use crate::core::{engine::MapEngine, pipeline::MapPipeline};
pub use utils::error::{MapError, Result};
