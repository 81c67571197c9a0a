//! Shared construction logic for the database tools
//!
//! Every database tool is built over a `DbToolContext`: the loaded agent
//! configuration, the connection manager for its namespaces, and the
//! introspector binding. Under eager binding the introspector is resolved
//! once here, for the configured (or overridden) database; under lazy
//! binding each call resolves a fresh one for the database it names.

use dbagent_core::config::{load_agent_config, AgentConfig, BindingMode, ToolInit};
use dbagent_core::db::{ConnectionManager, DbDialect, DbIntrospector};
use dbagent_core::error::AgentResult;
use std::sync::Arc;
use tracing::debug;

/// Collaborator bundle shared by the five database tools
pub struct DbToolContext {
    config: AgentConfig,
    manager: ConnectionManager,
    bound: Option<Arc<dyn DbIntrospector>>,
}

impl DbToolContext {
    /// Load configuration and set up the binding for one tool set.
    ///
    /// Fails with a configuration error before any database call when the
    /// config path or namespace is invalid. Under eager binding the
    /// connection for the current database is resolved here as well.
    pub async fn initialize(init: &ToolInit) -> AgentResult<Self> {
        let config = load_agent_config(init)?;
        let manager = ConnectionManager::new(config.namespaces.clone());

        let bound = match config.binding {
            BindingMode::Eager => {
                debug!(
                    namespace = %config.current_namespace,
                    database = %config.current_database,
                    "binding introspector eagerly"
                );
                Some(
                    manager
                        .introspector(&config.current_namespace, &config.current_database)
                        .await?,
                )
            }
            BindingMode::Lazy => None,
        };

        Ok(Self {
            config,
            manager,
            bound,
        })
    }

    /// Build a context around an already-constructed introspector.
    ///
    /// Used by tests to substitute a mock; the binding is always eager.
    pub fn with_introspector(config: AgentConfig, introspector: Arc<dyn DbIntrospector>) -> Self {
        let manager = ConnectionManager::new(config.namespaces.clone());
        Self {
            config,
            manager,
            bound: Some(introspector),
        }
    }

    /// The agent configuration this context was built from.
    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    /// Dialect of the current namespace.
    pub fn dialect(&self) -> DbDialect {
        self.config.dialect
    }

    /// Resolve the introspector for a call.
    ///
    /// Eager binding returns the handle fixed at construction; the
    /// per-call database request only matters under lazy binding.
    pub async fn introspector(
        &self,
        database: Option<&str>,
    ) -> AgentResult<Arc<dyn DbIntrospector>> {
        if let Some(bound) = &self.bound {
            return Ok(Arc::clone(bound));
        }

        let database = match database {
            Some(name) if !name.is_empty() => name,
            _ => self.config.current_database.as_str(),
        };
        debug!(
            namespace = %self.config.current_namespace,
            database,
            "resolving introspector per call"
        );
        self.manager
            .introspector(&self.config.current_namespace, database)
            .await
    }
}
