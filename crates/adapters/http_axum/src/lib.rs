//! # shopfront-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** (`/api/products`, `/api/shop`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Optionally serve a pre-built front-end bundle for every other path
//!
//! ## Dependency rule
//! Depends on `shopfront-app` (for port traits and services) and `shopfront-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
