//! dbagent Core Library
//!
//! This crate provides the building blocks for the dbagent tool set:
//! the tool contract exposed to agent hosts, configuration loading,
//! error types, and the database seam (dialects, introspection trait,
//! connection management).

pub mod config;
pub mod db;
pub mod error;
pub mod tools;

// Re-export commonly used types
pub use config::{AgentConfig, BindingMode, ToolInit};
pub use db::{ConnectionManager, DbDialect, DbIntrospector, DbToolResult};
pub use error::{AgentError, AgentResult};
pub use tools::{Tool, ToolCall, ToolEnvelope, ToolResult, ToolSchema};
