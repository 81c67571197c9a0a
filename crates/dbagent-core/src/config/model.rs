//! Configuration model for dbagent
//!
//! The host hands every tool a small construction mapping (`ToolInit`)
//! naming a config file and a namespace; the loader turns that into the
//! resolved `AgentConfig` the tools work from.

use crate::db::DbDialect;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// When the introspector binding for a tool is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingMode {
    /// Resolve one introspector at tool construction
    #[default]
    Eager,
    /// Resolve a fresh introspector on every call
    Lazy,
}

/// Connection settings for one named database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection URL understood by the dialect's driver
    pub url: String,
}

/// One namespace: a dialect plus its named databases
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamespaceConfig {
    /// Which engine this namespace speaks
    pub dialect: DbDialect,
    /// Databases reachable in this namespace, by name
    #[serde(default)]
    pub databases: HashMap<String, DatabaseConfig>,
    /// Database used when a tool is constructed without an override
    #[serde(default)]
    pub default_database: Option<String>,
}

impl NamespaceConfig {
    /// The database a tool binds to when none is requested explicitly.
    ///
    /// Falls back to the sole configured database when no default is named.
    pub fn resolve_default_database(&self) -> Option<String> {
        if let Some(name) = &self.default_database {
            return Some(name.clone());
        }
        if self.databases.len() == 1 {
            return self.databases.keys().next().cloned();
        }
        None
    }
}

/// Resolved agent configuration, fixed at tool construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Dialect of the current namespace
    pub dialect: DbDialect,
    /// All configured namespaces
    pub namespaces: HashMap<String, NamespaceConfig>,
    /// Namespace the tool operates in
    pub current_namespace: String,
    /// Database the tool binds to by default
    pub current_database: String,
    /// Eager or lazy introspector binding
    #[serde(default)]
    pub binding: BindingMode,
}

impl AgentConfig {
    /// Settings for the current namespace.
    pub fn current_namespace_config(&self) -> Option<&NamespaceConfig> {
        self.namespaces.get(&self.current_namespace)
    }
}

/// On-disk configuration file shape
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Namespaces by name
    #[serde(default)]
    pub namespaces: HashMap<String, NamespaceConfig>,
    /// Binding policy applied to every tool built from this file
    #[serde(default)]
    pub binding: Option<BindingMode>,
}

/// Construction mapping handed over by the host framework
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInit {
    /// Path of the configuration file
    pub config_path: PathBuf,
    /// Namespace to operate in
    pub namespace: String,
    /// Optional database override for eager binding
    #[serde(default)]
    pub database: Option<String>,
    /// Optional binding-policy override
    #[serde(default)]
    pub binding: Option<BindingMode>,
}

impl ToolInit {
    /// Create an init mapping for a config path and namespace
    pub fn new(config_path: impl Into<PathBuf>, namespace: impl Into<String>) -> Self {
        Self {
            config_path: config_path.into(),
            namespace: namespace.into(),
            database: None,
            binding: None,
        }
    }

    /// Set the database override
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set the binding-policy override
    pub fn with_binding(mut self, binding: BindingMode) -> Self {
        self.binding = Some(binding);
        self
    }
}
