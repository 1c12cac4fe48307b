//! Product properties the model classifies.

use serde::{Deserialize, Serialize};

use crate::catalog::CatalogError;

/// A product property shown as one field of the classification form.
///
/// Brand and size are free-form; the other properties draw their values
/// from a catalog table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationProperty {
    Brand,
    Category,
    Color,
    Condition,
    Material,
    Pattern,
    Size,
}

impl ClassificationProperty {
    /// All properties in form order.
    pub const ALL: [Self; 7] = [
        Self::Brand,
        Self::Category,
        Self::Color,
        Self::Condition,
        Self::Material,
        Self::Pattern,
        Self::Size,
    ];

    /// Short lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Category => "category",
            Self::Color => "color",
            Self::Condition => "condition",
            Self::Material => "material",
            Self::Pattern => "pattern",
            Self::Size => "size",
        }
    }

    /// Name of the argument carrying the value in the upsert function.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Category => "product_category",
            other => other.as_str(),
        }
    }

    /// Human-readable name used in function descriptions.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Category => "product category",
            other => other.as_str(),
        }
    }

    /// Whether allowed values come from a catalog table.
    #[must_use]
    pub const fn has_catalog(self) -> bool {
        !matches!(self, Self::Brand | Self::Size)
    }
}

impl std::fmt::Display for ClassificationProperty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ClassificationProperty {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == normalized || p.field_name() == normalized)
            .ok_or(CatalogError::UnknownProperty(normalized))
    }
}
