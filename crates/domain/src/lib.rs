//! # shopfront-domain
//!
//! Pure domain model for the shopfront catalog service.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, timestamps
//! - Define **Products** (catalog items shown in the shop's gallery)
//! - Define **Shop info** (the singleton record with the shop's contact details)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod product;
pub mod shop_info;
