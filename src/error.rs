//! Error types for dtype lookup.

/// Errors that can occur while resolving a [`Dtype`](crate::types::Dtype).
///
/// Construction, comparison and size queries are total; only lookups keyed
/// by a native or host type can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DtypeError {
    #[error("unsupported data type: {type_name}")]
    UnsupportedType { type_name: String },
}

impl DtypeError {
    /// Builds an [`UnsupportedType`](Self::UnsupportedType) error for the named type.
    pub fn unsupported(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }

    /// Returns the name of the type that had no registry entry.
    pub fn type_name(&self) -> &str {
        match self {
            Self::UnsupportedType { type_name } => type_name,
        }
    }
}
