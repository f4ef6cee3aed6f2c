//! Canonical dtype constants.
//!
//! These are the only dtypes external code is expected to reference by name.

use crate::types::{Dtype, DtypeCode};

impl Dtype {
    pub const UNDEFINED: Dtype = Dtype::new(DtypeCode::Undefined, 1);
    pub const FLOAT32: Dtype = Dtype::new(DtypeCode::Float, 4);
    pub const FLOAT64: Dtype = Dtype::new(DtypeCode::Float, 8);
    pub const INT32: Dtype = Dtype::new(DtypeCode::Int, 4);
    pub const INT64: Dtype = Dtype::new(DtypeCode::Int, 8);
    pub const UINT8: Dtype = Dtype::new(DtypeCode::UInt, 1);
    pub const UINT16: Dtype = Dtype::new(DtypeCode::UInt, 2);
    pub const BOOL: Dtype = Dtype::new(DtypeCode::Bool, 1);
}

/// Canonical dtypes paired with their registry names, in declaration order.
pub static CANONICAL: [(&str, Dtype); 8] = [
    ("Undefined", Dtype::UNDEFINED),
    ("Float32", Dtype::FLOAT32),
    ("Float64", Dtype::FLOAT64),
    ("Int32", Dtype::INT32),
    ("Int64", Dtype::INT64),
    ("UInt8", Dtype::UINT8),
    ("UInt16", Dtype::UINT16),
    ("Bool", Dtype::BOOL),
];

/// Looks up a canonical dtype by its registry name (case-sensitive).
pub fn by_name(name: &str) -> Option<Dtype> {
    CANONICAL
        .iter()
        .find(|(n, _)| *n == name)
        .map(|&(_, dtype)| dtype)
}

/// Returns the registry name of `dtype`, or `None` if it is not canonical.
pub fn name_of(dtype: Dtype) -> Option<&'static str> {
    CANONICAL
        .iter()
        .find(|(_, d)| *d == dtype)
        .map(|&(name, _)| name)
}

/// Iterates over all canonical dtypes.
pub fn canonical() -> impl Iterator<Item = Dtype> {
    CANONICAL.iter().map(|&(_, dtype)| dtype)
}
