//! Tool implementations for dbagent
//!
//! Database introspection and read-only query tools exposed through the
//! host agent framework's tool contract.

pub mod database;

pub use database::{
    database_tools, execute_enveloped, DatabaseTool, DbToolContext, DescTableTool, ListTableTool,
    QueryTool, SchemaTool,
};
