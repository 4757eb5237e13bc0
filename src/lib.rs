pub mod config;
pub mod domain;
pub mod error;
pub mod report;
pub mod resolver;
pub mod source;

pub use error::{FindFixError, Result};
