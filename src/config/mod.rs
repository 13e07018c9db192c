//! Configuration management module

pub mod builder;
pub mod loader;
pub mod validation;

pub use builder::ConfigBuilder;
pub use loader::{Config, PullRequestDefaults};
pub use validation::{ValidationError, ValidationErrors};
