//! Command implementations

pub mod base;
pub mod publish;
pub mod validators;

pub use base::{Command, CommandContext};
pub use publish::PublishCommand;
