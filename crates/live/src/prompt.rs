//! System instruction rendering.
//!
//! The instruction lists the allowed values of every catalog property. The
//! lists come from the typed catalog tables and are interpolated by Askama
//! templates, one per locale.

use askama::Template;
use garderobe_core::{CatalogTable, ClassificationProperty, Locale, catalog};
use tracing::instrument;

use crate::error::LiveError;

/// Allowed values of each catalog property, joined for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AllowedValues {
    pub categories: String,
    pub colors: String,
    pub conditions: String,
    pub materials: String,
    pub patterns: String,
}

impl AllowedValues {
    /// Collect the allowed values from the catalog tables of a locale.
    #[must_use]
    pub fn for_locale(locale: Locale) -> Self {
        let joined = |property| {
            catalog::table(property, locale)
                .as_ref()
                .map(CatalogTable::allowed_values)
                .unwrap_or_default()
        };
        Self {
            categories: joined(ClassificationProperty::Category),
            colors: joined(ClassificationProperty::Color),
            conditions: joined(ClassificationProperty::Condition),
            materials: joined(ClassificationProperty::Material),
            patterns: joined(ClassificationProperty::Pattern),
        }
    }
}

#[derive(Template)]
#[template(path = "system_instruction/sv.txt")]
struct SwedishInstruction<'a> {
    allowed: &'a AllowedValues,
}

#[derive(Template)]
#[template(path = "system_instruction/en.txt")]
struct EnglishInstruction<'a> {
    allowed: &'a AllowedValues,
}

/// Render the system instruction for a locale.
///
/// # Errors
///
/// Returns `LiveError::Template` if rendering fails.
#[instrument]
pub fn render_system_instruction(locale: Locale) -> Result<String, LiveError> {
    let allowed = AllowedValues::for_locale(locale);
    let text = match locale {
        Locale::Swedish => SwedishInstruction { allowed: &allowed }.render()?,
        Locale::English => EnglishInstruction { allowed: &allowed }.render()?,
    };
    Ok(text)
}
