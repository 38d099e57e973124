pub mod config;
pub mod error;
pub mod generator;
pub mod label;
pub mod output;
pub mod query;

pub use config::GeneratorConfig;
pub use error::{Error, Result};
pub use generator::{generate, queries};
