//! # Quillgate API
//!
//! A REST API skeleton built with Rust and Axum that standardizes how
//! endpoints respond and how the authenticated caller travels with a request.
//!
//! ## Overview
//!
//! Quillgate provides the shared backbone for HTTP services:
//!
//! - **Success envelope**: every successful response is the same
//!   `{ success, message, data }` shape with overridable message and status
//! - **Auth context**: an optional, strongly-typed authenticated-user payload
//!   attached to each request by upstream middleware, consumed via extractors
//! - **Observability**: request-scoped structured logging with request ids
//!
//! ## Architecture
//!
//! The codebase follows a modular architecture:
//!
//! ```text
//! src/
//! ├── docs.rs           # OpenAPI documentation setup
//! ├── logging.rs        # Request logging middleware
//! ├── middleware/       # Extractors for the auth context
//! ├── modules/          # Feature modules
//! │   ├── health/      # Liveness endpoint
//! │   └── session/     # Session inspection endpoints
//! ├── router.rs         # Main application router
//! └── state.rs          # Shared application state
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: HTTP handlers (routes)
//! - `model.rs`: Response models
//! - `router.rs`: Axum router configuration
//!
//! ## Authentication
//!
//! Quillgate does not verify credentials itself. A gateway or dedicated
//! middleware in front of the service is expected to attach an
//! [`quillgate_core::AuthUser`] request extension once it has identified the
//! caller. Handlers pick the context up through
//! [`middleware::auth::CurrentUser`]; its absence means the request is
//! unauthenticated.
//!
//! ## Quick Start
//!
//! ### Environment Variables
//!
//! ```bash
//! HOST=0.0.0.0
//! PORT=3000
//! ALLOWED_ORIGINS=http://localhost:3000,http://localhost:5173
//! ```
//!
//! ### API Documentation
//!
//! When the server is running, API documentation is available at:
//!
//! - Swagger UI: `http://localhost:3000/swagger-ui`
//! - Scalar: `http://localhost:3000/scalar`

pub mod docs;
pub mod logging;
pub mod middleware;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use quillgate_config;
pub use quillgate_core;
