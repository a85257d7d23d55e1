pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{ApiCommand, CliConfig, Command};

pub use config::{ApiConfig, TomlConfig};
pub use crate::core::{client::ApiClient, router::Router};
pub use domain::filter::{Filter, Operator};
pub use domain::model::Record;
pub use domain::resource::{Operation, Resource};
pub use utils::error::{ApiError, Result};
