//! # shopfront-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ProductRepository` — create, list, get and overwrite products
//!   - `ShopInfoRepository` — read and atomically upsert the singleton shop info
//! - Define **driving/inbound ports** as use-case structs:
//!   - `ProductService` — create, list, get, update
//!   - `ShopInfoService` — read, upsert
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `shopfront-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
