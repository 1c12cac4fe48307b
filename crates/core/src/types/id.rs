//! Newtype IDs for type-safe references.
//!
//! Use the `define_id!` macro to create ID wrappers that prevent
//! accidentally mixing catalog entries with session bookkeeping values.

/// Macro to define a type-safe ID wrapper around an unsigned integer.
///
/// Creates a newtype wrapper with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - Conversion methods: `new()`, `get()`
/// - `From` conversions in both directions and `Display`
///
/// # Example
///
/// ```rust
/// # use garderobe_core::define_id;
/// define_id!(ListenerId, u64);
/// define_id!(EntryId, u16);
///
/// let listener = ListenerId::new(1);
/// let entry = EntryId::new(1);
///
/// // These are different types, so this won't compile:
/// // let _: ListenerId = entry;
/// assert_eq!(listener.get(), 1);
/// assert_eq!(entry.to_string(), "1");
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident, $inner:ty) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name($inner);

        impl $name {
            /// Create a new ID from its raw value.
            #[must_use]
            pub const fn new(id: $inner) -> Self {
                Self(id)
            }

            /// Get the underlying raw value.
            #[must_use]
            pub const fn get(&self) -> $inner {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<$inner> for $name {
            fn from(id: $inner) -> Self {
                Self(id)
            }
        }

        impl From<$name> for $inner {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

// Stable identifier of a catalog entry; identical across locale tables.
define_id!(CatalogId, u16);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_id_roundtrip() {
        let id = CatalogId::new(41);
        assert_eq!(id.get(), 41);
        assert_eq!(u16::from(id), 41);
        assert_eq!(CatalogId::from(41), id);
        assert_eq!(id.to_string(), "41");
    }

    #[test]
    fn test_catalog_id_serializes_transparently() {
        let json = serde_json::to_string(&CatalogId::new(7)).expect("serialize");
        assert_eq!(json, "7");
    }

    #[test]
    fn test_catalog_id_ordering() {
        assert!(CatalogId::new(1) < CatalogId::new(2));
    }
}
