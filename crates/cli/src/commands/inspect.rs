//! Commands that print the static parts of a live session.
//!
//! # Usage
//!
//! ```bash
//! garderobe config --locale en
//! garderobe declarations
//! garderobe catalog material --locale en
//! ```

use garderobe_core::{ClassificationProperty, Locale, catalog};
use garderobe_live::declarations::function_declarations;
use garderobe_live::{ClientMessage, LiveError, LiveSettings, SessionConfig};
use thiserror::Error;

/// Errors that can occur while inspecting the session.
#[derive(Debug, Error)]
pub enum InspectError {
    /// Assembling or encoding the configuration failed.
    #[error(transparent)]
    Live(#[from] LiveError),

    /// The property has no catalog table.
    #[error("{0} is free-form and has no catalog")]
    FreeForm(ClassificationProperty),
}

/// Print the setup message that mounting a component would submit.
///
/// # Errors
///
/// Returns an error if the configuration cannot be assembled or encoded.
#[allow(clippy::print_stdout)]
pub fn config(settings: &LiveSettings) -> Result<(), InspectError> {
    let setup = ClientMessage::Setup(SessionConfig::assemble(settings)?);
    let json = serde_json::to_string_pretty(&setup).map_err(LiveError::from)?;
    println!("{json}");
    Ok(())
}

/// Print the function declarations offered to the model.
///
/// # Errors
///
/// Returns an error if the declarations cannot be encoded.
#[allow(clippy::print_stdout)]
pub fn declarations(settings: &LiveSettings) -> Result<(), InspectError> {
    let declarations = function_declarations(settings.charts);
    let json = serde_json::to_string_pretty(&declarations).map_err(LiveError::from)?;
    println!("{json}");
    Ok(())
}

/// Print `id: label` rows for a property's catalog.
///
/// # Errors
///
/// Returns `InspectError::FreeForm` for brand and size.
#[allow(clippy::print_stdout)]
pub fn catalog(property: ClassificationProperty, locale: Locale) -> Result<(), InspectError> {
    let table = catalog::table(property, locale).ok_or(InspectError::FreeForm(property))?;
    for (id, label) in table.entries() {
        println!("{id}: {label}");
    }
    Ok(())
}
