//! In-memory classification record backing the on-screen form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog;

use super::{CatalogId, ClassificationProperty};

/// A value set for one property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyValue {
    /// The value exactly as the model supplied it.
    pub value: String,
    /// Catalog entry the value matches, in any locale.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_id: Option<CatalogId>,
}

impl PropertyValue {
    /// Build a value, resolving it against the property's catalog table.
    #[must_use]
    pub fn resolve(property: ClassificationProperty, value: impl Into<String>) -> Self {
        let value = value.into();
        let catalog_id = catalog::resolve(property, &value);
        Self { value, catalog_id }
    }
}

/// Whether the user has finished classifying the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ClassificationStatus {
    #[default]
    InProgress,
    Completed {
        success: bool,
    },
}

/// The current set of classified properties for one product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductClassification {
    values: BTreeMap<ClassificationProperty, PropertyValue>,
    status: ClassificationStatus,
}

impl ProductClassification {
    /// Create an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or replace a property value, returning the previous one.
    pub fn upsert(
        &mut self,
        property: ClassificationProperty,
        value: impl Into<String>,
    ) -> Option<PropertyValue> {
        self.values
            .insert(property, PropertyValue::resolve(property, value))
    }

    /// Current value of a property.
    #[must_use]
    pub fn get(&self, property: ClassificationProperty) -> Option<&PropertyValue> {
        self.values.get(&property)
    }

    /// Iterate over set properties in form order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassificationProperty, &PropertyValue)> {
        self.values.iter().map(|(p, v)| (*p, v))
    }

    /// Properties that have not been set yet, in form order.
    #[must_use]
    pub fn missing(&self) -> Vec<ClassificationProperty> {
        ClassificationProperty::ALL
            .into_iter()
            .filter(|p| !self.values.contains_key(p))
            .collect()
    }

    /// Record the completion signal.
    pub fn complete(&mut self, success: bool) {
        self.status = ClassificationStatus::Completed { success };
    }

    #[must_use]
    pub const fn status(&self) -> ClassificationStatus {
        self.status
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self.status, ClassificationStatus::Completed { .. })
    }
}
