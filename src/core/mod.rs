//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including error handling, configuration, widget asset loading, server
//! lifecycle management, and transport layer abstractions.

pub mod assets;
pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use assets::{AssetError, AssetStore};
pub use config::Config;
pub use error::{Error, Result};
pub use server::McpServer;
pub use transport::{TransportConfig, TransportService};
