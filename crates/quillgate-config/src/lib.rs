//! # Quillgate Config
//!
//! Configuration types for the Quillgate API.
//!
//! This crate provides configuration structures loaded from environment
//! variables:
//!
//! - [`server`]: HTTP listener bind address
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) configuration
//!
//! # Example
//!
//! ```ignore
//! use quillgate_config::{CorsConfig, ServerConfig};
//!
//! // Load all configs from environment
//! let server_config = ServerConfig::from_env();
//! let cors_config = CorsConfig::from_env();
//! ```

pub mod cors;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::CorsConfig;
pub use server::ServerConfig;
