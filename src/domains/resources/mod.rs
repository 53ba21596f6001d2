//! Resources domain module.
//!
//! Widget markup is addressable as MCP resources, one per catalog entry,
//! under the `ui://widget/<name>.html` URI scheme.
//!
//! - `service.rs` - Resource listing and URI resolution over the catalog
//! - `error.rs` - Resource-specific error types

mod error;
mod service;

pub use error::ResourceError;
pub use service::ResourceService;
