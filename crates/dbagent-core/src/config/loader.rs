//! Agent configuration loading
//!
//! Supports JSON, TOML, and YAML formats based on file extension. Unlike a
//! user-facing settings file, a missing or invalid path here is an error:
//! tools must fail at construction, before any database call is attempted.

use crate::config::model::{AgentConfig, ConfigFile, ToolInit};
use crate::error::{AgentError, AgentResult};
use std::fs;
use std::path::Path;

/// Parse a configuration file by extension.
pub fn load_config_file(path: &Path) -> AgentResult<ConfigFile> {
    if !path.exists() {
        return Err(AgentError::config(format!(
            "Config file not found: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path).map_err(|e| {
        AgentError::config(format!(
            "Failed to read config file '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: ConfigFile = match path.extension().and_then(|s| s.to_str()) {
        Some("toml") => toml::from_str(&content).map_err(|e| {
            AgentError::config(format!(
                "Failed to parse TOML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| {
            AgentError::config(format!(
                "Failed to parse YAML config '{}': {}",
                path.display(),
                e
            ))
        })?,
        _ => serde_json::from_str(&content).map_err(|e| {
            AgentError::config(format!(
                "Failed to parse JSON config '{}': {}",
                path.display(),
                e
            ))
        })?,
    };

    Ok(config)
}

/// Load and resolve the agent configuration for one namespace.
///
/// The returned config is immutable from the tools' perspective; it pins the
/// namespace's dialect and the database used when no override is given.
pub fn load_agent_config(init: &ToolInit) -> AgentResult<AgentConfig> {
    let file = load_config_file(&init.config_path)?;

    let namespace = file.namespaces.get(&init.namespace).ok_or_else(|| {
        AgentError::config(format!(
            "Namespace '{}' not defined in '{}'",
            init.namespace,
            init.config_path.display()
        ))
    })?;

    let current_database = init
        .database
        .clone()
        .or_else(|| namespace.resolve_default_database())
        .ok_or_else(|| {
            AgentError::config(format!(
                "Namespace '{}' has no default database and none was requested",
                init.namespace
            ))
        })?;

    if !namespace.databases.contains_key(&current_database) {
        return Err(AgentError::config(format!(
            "Database '{}' not defined in namespace '{}'",
            current_database, init.namespace
        )));
    }

    Ok(AgentConfig {
        dialect: namespace.dialect,
        namespaces: file.namespaces.clone(),
        current_namespace: init.namespace.clone(),
        current_database,
        binding: init.binding.or(file.binding).unwrap_or_default(),
    })
}
