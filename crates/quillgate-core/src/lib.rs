//! # Quillgate Core
//!
//! Core types shared across the Quillgate API.
//!
//! This crate provides the foundational pieces used by every handler:
//!
//! - [`response`]: the standardized success envelope returned by all endpoints
//! - [`errors`]: application error type with HTTP response conversion
//! - [`auth`]: the authenticated-user context attached to requests upstream
//!
//! # Example
//!
//! ```ignore
//! use quillgate_core::{ApiResponse, AppError, AuthUser, Role};
//! use axum::http::StatusCode;
//!
//! // Wrap a payload in the success envelope
//! let response = ApiResponse::ok(payload)
//!     .with_message("Created")
//!     .with_status(StatusCode::CREATED);
//!
//! // Reject a request
//! let error = AppError::unauthorized("Authentication required");
//! ```

pub mod auth;
pub mod errors;
pub mod response;

// Re-export commonly used types at crate root
pub use auth::{AuthUser, Role};
pub use errors::AppError;
pub use response::ApiResponse;
