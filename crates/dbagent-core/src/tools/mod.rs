//! Tool system for dbagent

pub mod base;
pub mod envelope;
pub mod registry;
pub mod types;

pub use base::{Tool, ToolError};
pub use envelope::{ToolEnvelope, ENVELOPE_SCORE};
pub use registry::ToolRegistry;
pub use types::{ToolCall, ToolParameter, ToolResult, ToolSchema};
