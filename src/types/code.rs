//! Dtype category codes.

use std::fmt;

/// The category of scalar an element belongs to.
///
/// `Bool` is kept apart from `UInt` even though both fit in one byte:
/// consumers must be able to tell logical values from arithmetic ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DtypeCode {
    Undefined,
    Bool,
    Int,
    UInt,
    Float,
    Object,
}

impl DtypeCode {
    /// Short label used when rendering non-canonical dtypes.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Undefined => "Undefined",
            Self::Bool => "Bool",
            Self::Int => "Int",
            Self::UInt => "UInt",
            Self::Float => "Float",
            Self::Object => "Object",
        }
    }
}

impl fmt::Display for DtypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
