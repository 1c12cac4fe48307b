//! Core types for garderobe.
//!
//! This module provides type-safe wrappers for the classification domain.

pub mod classification;
pub mod id;
pub mod locale;
pub mod property;

pub use classification::{ClassificationStatus, ProductClassification, PropertyValue};
pub use id::*;
pub use locale::Locale;
pub use property::ClassificationProperty;
