//! Configuration management for dbagent

pub mod loader;
pub mod model;

pub use loader::{load_agent_config, load_config_file};
pub use model::{AgentConfig, BindingMode, ConfigFile, DatabaseConfig, NamespaceConfig, ToolInit};
