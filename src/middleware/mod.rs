//! Middleware modules for request processing.
//!
//! # Modules
//!
//! - [`auth`]: Extractors for the authenticated-user context
//!
//! # Authentication Flow
//!
//! 1. Upstream middleware (gateway, auth service) identifies the caller and
//!    attaches an `AuthUser` extension to the request
//! 2. Handlers extract the context with [`auth::CurrentUser`] (rejects with
//!    `401` when absent) or `Option<CurrentUser>` (never rejects)
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::CurrentUser;
//!
//! // Requires an attached context (401 otherwise)
//! async fn get_profile(CurrentUser(user): CurrentUser) -> impl IntoResponse {
//!     // ...
//! }
//!
//! // Anonymous callers allowed
//! async fn get_session(user: Option<CurrentUser>) -> impl IntoResponse {
//!     // ...
//! }
//! ```

pub mod auth;
