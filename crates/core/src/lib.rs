//! Garderobe Core - Shared classification types.
//!
//! This crate provides the types used across all garderobe components:
//! - `live` - Session configuration and tool-call handling for the live model
//! - `cli` - Command-line tools for inspecting configuration and replaying sessions
//!
//! # Architecture
//!
//! The core crate contains only types and static tables - no I/O, no async,
//! no network clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`catalog`] - Translated tables of allowed property values
//! - [`types`] - Locales, properties, newtype IDs, and the classification record

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod types;

pub use catalog::{CatalogError, CatalogTable};
pub use types::*;
