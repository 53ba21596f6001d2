//! Pizzaz MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that backs a set
//! of pizza demo widgets and a retirement income estimator. Every tool call
//! answers with widget markup metadata so a host can render the matching
//! component, and every widget is also addressable as a resource.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   asset loading, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **widgets**: The widget catalog and its host-facing metadata
//!   - **tools**: Tool listing, input validation, and dispatch
//!   - **resources**: Widget markup served as MCP resources
//!
//! # Example
//!
//! ```rust,no_run
//! use pizzaz_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
