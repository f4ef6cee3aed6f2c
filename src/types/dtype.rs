//! The `Dtype` value.

use std::fmt;

use crate::registry;
use crate::types::DtypeCode;

/// Describes the scalar element stored in a container: its category and
/// the number of bytes one element occupies.
///
/// Two dtypes are equal only when both the code and the byte size match.
/// Construction never validates; any `(code, byte_size)` pair is accepted,
/// but only the canonical constants (see [`registry`]) are recognized by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dtype {
    code: DtypeCode,
    byte_size: i64,
}

impl Dtype {
    /// Creates a dtype from a category code and a per-element byte size.
    pub const fn new(code: DtypeCode, byte_size: i64) -> Self {
        Self { code, byte_size }
    }

    /// Returns the category code.
    pub const fn code(self) -> DtypeCode {
        self.code
    }

    /// Returns the number of bytes one element occupies.
    pub const fn byte_size(self) -> i64 {
        self.byte_size
    }

    /// Returns the registry name if this is one of the canonical dtypes.
    pub fn name(self) -> Option<&'static str> {
        registry::name_of(self)
    }

    /// True only for the `Bool` category, whatever its byte size.
    pub const fn is_bool(self) -> bool {
        matches!(self.code, DtypeCode::Bool)
    }

    /// True for floating-point dtypes of any width.
    pub const fn is_float(self) -> bool {
        matches!(self.code, DtypeCode::Float)
    }

    /// True for both signed and unsigned integers. `Bool` is not an integer.
    pub const fn is_integer(self) -> bool {
        matches!(self.code, DtypeCode::Int | DtypeCode::UInt)
    }

    /// True when the category can represent negative values: signed
    /// integers and floats. Unsigned integers, `Bool`, `Object` and
    /// `Undefined` are not signed.
    pub const fn is_signed(self) -> bool {
        matches!(self.code, DtypeCode::Int | DtypeCode::Float)
    }
}

impl Default for Dtype {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

impl fmt::Display for Dtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}({})", self.code, self.byte_size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_CODES: [DtypeCode; 6] = [
        DtypeCode::Undefined,
        DtypeCode::Bool,
        DtypeCode::Int,
        DtypeCode::UInt,
        DtypeCode::Float,
        DtypeCode::Object,
    ];

    #[test]
    fn default_is_undefined_one_byte() {
        let d = Dtype::default();
        assert_eq!(d, Dtype::new(DtypeCode::Undefined, 1));
        assert_eq!(d.byte_size(), 1);
        assert_eq!(d, Dtype::UNDEFINED);
    }

    #[test]
    fn byte_size_is_stored_verbatim() {
        for size in [i64::MIN, -3, 0, 1, 2, 16, i64::MAX] {
            assert_eq!(Dtype::new(DtypeCode::Object, size).byte_size(), size);
        }
    }

    #[test]
    fn equality_is_reflexive_for_arbitrary_pairs() {
        for code in ALL_CODES {
            for size in [-1, 0, 1, 4, 8, 1024] {
                assert_eq!(Dtype::new(code, size), Dtype::new(code, size));
            }
        }
    }

    #[test]
    fn not_equal_is_negated_equal() {
        let samples = [
            Dtype::FLOAT32,
            Dtype::UINT8,
            Dtype::BOOL,
            Dtype::new(DtypeCode::UInt, 1),
            Dtype::new(DtypeCode::Float, 2),
        ];
        for a in samples {
            for b in samples {
                assert_eq!(a != b, !(a == b));
            }
        }
    }

    #[test]
    fn equality_is_category_sensitive() {
        // Same width, different category.
        assert_ne!(Dtype::new(DtypeCode::Int, 4), Dtype::new(DtypeCode::Float, 4));
        assert_ne!(Dtype::BOOL, Dtype::new(DtypeCode::UInt, 1));
    }

    #[test]
    fn constructed_uint16_matches_canonical() {
        assert_eq!(Dtype::new(DtypeCode::UInt, 2), Dtype::UINT16);
        assert_ne!(Dtype::new(DtypeCode::UInt, 4), Dtype::UINT16);
    }

    #[test]
    fn display_uses_canonical_name() {
        assert_eq!(Dtype::FLOAT32.to_string(), "Float32");
        assert_eq!(Dtype::new(DtypeCode::Bool, 1).to_string(), "Bool");
        assert_eq!(Dtype::default().to_string(), "Undefined");
    }

    #[test]
    fn display_encodes_code_and_size_for_other_values() {
        assert_eq!(Dtype::new(DtypeCode::UInt, 4).to_string(), "UInt(4)");
        assert_eq!(Dtype::new(DtypeCode::Undefined, 0).to_string(), "Undefined(0)");
        assert_eq!(Dtype::new(DtypeCode::Object, 8).to_string(), "Object(8)");
    }

    #[test]
    fn category_predicates() {
        assert!(Dtype::BOOL.is_bool());
        assert!(!Dtype::BOOL.is_integer());
        assert!(Dtype::UINT8.is_integer());
        assert!(!Dtype::UINT8.is_signed());
        assert!(Dtype::INT64.is_signed());
        assert!(Dtype::FLOAT32.is_signed());
        assert!(!Dtype::BOOL.is_signed());
        assert!(!Dtype::UNDEFINED.is_signed());
        assert!(Dtype::new(DtypeCode::Bool, 4).is_bool());
        assert!(Dtype::FLOAT64.is_float());
        assert!(!Dtype::UNDEFINED.is_float());
    }
}
