pub mod link;

pub use crate::core::link::{create_link, so_directive};
pub use crate::utils::error::Result;
