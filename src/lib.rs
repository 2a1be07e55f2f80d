pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::CliConfig;
pub use crate::core::link::{create_link, so_directive};
pub use crate::utils::error::{LinkError, Result};
