//! sigrate tools library

pub mod commands;
pub mod config;
pub mod render;

pub use commands::Command;
pub use config::{OutputFormat, ToolConfig};
pub use render::{render, Report};
