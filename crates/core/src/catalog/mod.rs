//! Translated tables of allowed property values.
//!
//! Each catalog property (category, color, condition, material, pattern)
//! has one table per [`Locale`]. Tables for the same property share their
//! ids: catalog id `n` names the same concept in every locale, so a value
//! supplied in either language resolves to one stable [`CatalogId`].
//!
//! ```
//! use garderobe_core::catalog;
//! use garderobe_core::{CatalogId, ClassificationProperty, Locale};
//!
//! let colors = catalog::table(ClassificationProperty::Color, Locale::Swedish).unwrap();
//! assert_eq!(colors.label(CatalogId::new(32)), Some("Röd"));
//! assert_eq!(
//!     catalog::resolve(ClassificationProperty::Color, "red"),
//!     Some(CatalogId::new(32))
//! );
//! ```

mod english;
mod swedish;

use thiserror::Error;

use crate::types::{CatalogId, ClassificationProperty, Locale};

/// Errors from parsing catalog selectors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The name does not match any classification property.
    #[error("unknown property: {0}")]
    UnknownProperty(String),
    /// The name does not match any supported locale.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// The allowed values of one property in one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogTable {
    property: ClassificationProperty,
    locale: Locale,
    labels: &'static [&'static str],
}

impl CatalogTable {
    #[must_use]
    pub const fn property(&self) -> ClassificationProperty {
        self.property
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Number of entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in id order.
    #[must_use]
    pub const fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    /// Label for a catalog id, if the id is in range.
    #[must_use]
    pub fn label(&self, id: CatalogId) -> Option<&'static str> {
        usize::from(id.get())
            .checked_sub(1)
            .and_then(|index| self.labels.get(index))
            .copied()
    }

    /// Find the id of a label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn find(&self, label: &str) -> Option<CatalogId> {
        let needle = label.trim().to_lowercase();
        self.entries()
            .find(|(_, candidate)| candidate.to_lowercase() == needle)
            .map(|(id, _)| id)
    }

    /// `(id, label)` pairs in id order.
    pub fn entries(&self) -> impl Iterator<Item = (CatalogId, &'static str)> + '_ {
        (1_u16..)
            .zip(self.labels.iter())
            .map(|(id, label)| (CatalogId::new(id), *label))
    }

    /// Labels joined with `", "`, as listed in the system instruction.
    #[must_use]
    pub fn allowed_values(&self) -> String {
        self.labels.join(", ")
    }
}

/// Look up the table for a property in a locale.
///
/// Returns `None` for free-form properties (brand, size).
#[must_use]
pub const fn table(property: ClassificationProperty, locale: Locale) -> Option<CatalogTable> {
    let labels = match (property, locale) {
        (ClassificationProperty::Category, Locale::English) => english::CATEGORIES,
        (ClassificationProperty::Category, Locale::Swedish) => swedish::CATEGORIES,
        (ClassificationProperty::Color, Locale::English) => english::COLORS,
        (ClassificationProperty::Color, Locale::Swedish) => swedish::COLORS,
        (ClassificationProperty::Condition, Locale::English) => english::CONDITIONS,
        (ClassificationProperty::Condition, Locale::Swedish) => swedish::CONDITIONS,
        (ClassificationProperty::Material, Locale::English) => english::MATERIALS,
        (ClassificationProperty::Material, Locale::Swedish) => swedish::MATERIALS,
        (ClassificationProperty::Pattern, Locale::English) => english::PATTERNS,
        (ClassificationProperty::Pattern, Locale::Swedish) => swedish::PATTERNS,
        (ClassificationProperty::Brand | ClassificationProperty::Size, _) => return None,
    };
    Some(CatalogTable {
        property,
        locale,
        labels,
    })
}

/// Resolve a value against every locale's table for the property.
#[must_use]
pub fn resolve(property: ClassificationProperty, value: &str) -> Option<CatalogId> {
    Locale::ALL
        .into_iter()
        .filter_map(|locale| table(property, locale))
        .find_map(|t| t.find(value))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn catalog_properties() -> impl Iterator<Item = ClassificationProperty> {
        ClassificationProperty::ALL
            .into_iter()
            .filter(|p| p.has_catalog())
    }

    #[test]
    fn test_every_catalog_property_has_tables() {
        for property in ClassificationProperty::ALL {
            for locale in Locale::ALL {
                assert_eq!(
                    table(property, locale).is_some(),
                    property.has_catalog(),
                    "{property} in {locale}"
                );
            }
        }
    }

    #[test]
    fn test_ids_are_stable_across_locales() {
        for property in catalog_properties() {
            let en = table(property, Locale::English).expect("english table");
            let sv = table(property, Locale::Swedish).expect("swedish table");
            let en_ids: Vec<_> = en.entries().map(|(id, _)| id).collect();
            let sv_ids: Vec<_> = sv.entries().map(|(id, _)| id).collect();
            assert_eq!(en_ids, sv_ids, "{property}");
        }
    }

    #[test]
    fn test_labels_are_unique_within_table() {
        for property in catalog_properties() {
            for locale in Locale::ALL {
                let t = table(property, locale).expect("table");
                let unique: HashSet<String> =
                    t.labels().iter().map(|l| l.to_lowercase()).collect();
                assert_eq!(unique.len(), t.len(), "{property} in {locale}");
            }
        }
    }

    #[test]
    fn test_every_label_resolves_to_its_own_id() {
        for property in catalog_properties() {
            for locale in Locale::ALL {
                let t = table(property, locale).expect("table");
                for (id, label) in t.entries() {
                    assert_eq!(resolve(property, label), Some(id), "{label}");
                }
            }
        }
    }

    #[test]
    fn test_table_sizes() {
        let sizes: Vec<_> = catalog_properties()
            .map(|p| table(p, Locale::English).map_or(0, |t| t.len()))
            .collect();
        // category, color, condition, material, pattern
        assert_eq!(sizes, vec![64, 41, 5, 51, 26]);
    }

    #[test]
    fn test_label_out_of_range() {
        let t = table(ClassificationProperty::Condition, Locale::English).expect("table");
        assert_eq!(t.label(CatalogId::new(0)), None);
        assert_eq!(t.label(CatalogId::new(6)), None);
        assert_eq!(t.label(CatalogId::new(1)), Some("New with tags"));
    }

    #[test]
    fn test_swedish_labels() {
        let colors = table(ClassificationProperty::Color, Locale::Swedish).expect("table");
        assert_eq!(colors.label(CatalogId::new(8)), Some("Bourgogne"));
        assert_eq!(colors.label(CatalogId::new(16)), Some("Gylden"));
        assert_eq!(colors.label(CatalogId::new(23)), Some("Maroon"));
        assert_eq!(colors.label(CatalogId::new(38)), Some("Violon"));

        let conditions = table(ClassificationProperty::Condition, Locale::Swedish).expect("table");
        assert_eq!(conditions.label(CatalogId::new(5)), Some("Rättvis"));

        let categories = table(ClassificationProperty::Category, Locale::Swedish).expect("table");
        assert_eq!(categories.label(CatalogId::new(50)), Some("Portmonnä"));
        assert_eq!(categories.label(CatalogId::new(62)), Some("Plånbok"));
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let t = table(ClassificationProperty::Pattern, Locale::Swedish).expect("table");
        assert_eq!(t.find("  ränder "), Some(CatalogId::new(22)));
        assert_eq!(t.find("RÄNDER"), Some(CatalogId::new(22)));
        assert_eq!(t.find("stripes"), None);
    }

    #[test]
    fn test_allowed_values_joined_in_id_order() {
        let t = table(ClassificationProperty::Condition, Locale::English).expect("table");
        assert_eq!(
            t.allowed_values(),
            "New with tags, New without tags, Very good, Good, Satisfactory"
        );
    }

    #[test]
    fn test_resolve_free_form_property() {
        assert_eq!(resolve(ClassificationProperty::Brand, "Acme"), None);
    }
}
