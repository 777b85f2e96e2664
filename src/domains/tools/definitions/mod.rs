//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

mod common;
pub mod cmd;
pub mod fetch;

pub use cmd::{CmdParams, CmdTool};
pub use fetch::{FetchParams, FetchTool};
