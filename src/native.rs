//! Mapping from Rust scalar types to canonical dtypes.
//!
//! The mapping is fixed:
//!
//! | Rust type | Dtype |
//! |---|---|
//! | `f32` | `Float32` |
//! | `f64` | `Float64` |
//! | `i32` | `Int32` |
//! | `i64` | `Int64` |
//! | `u8` | `UInt8` |
//! | `u16` | `UInt16` |
//! | `bool` | `Bool` |
//!
//! [`Dtype::of`] resolves at compile time; types outside the table are
//! rejected by the trait bound:
//!
//! ```compile_fail
//! let _ = scalar_dtype::Dtype::of::<u32>();
//! ```
//!
//! [`Dtype::try_of`] accepts any `'static` type and reports unmapped ones
//! as [`DtypeError::UnsupportedType`].

use std::any::{TypeId, type_name};

use crate::error::DtypeError;
use crate::types::Dtype;

mod sealed {
    pub trait Sealed {}
}

/// A Rust scalar type with a canonical dtype.
///
/// Sealed: the set of implementors is exactly the mapping table above.
pub trait NativeType: sealed::Sealed + Copy + 'static {
    const DTYPE: Dtype;
}

// Generates the trait impls and the runtime table from one list.
macro_rules! native_types {
    ($($ty:ty => $dtype:expr),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl NativeType for $ty {
                const DTYPE: Dtype = $dtype;
            }
        )*

        fn lookup(id: TypeId) -> Option<Dtype> {
            $(
                if id == TypeId::of::<$ty>() {
                    return Some($dtype);
                }
            )*
            None
        }
    };
}

native_types! {
    f32 => Dtype::FLOAT32,
    f64 => Dtype::FLOAT64,
    i32 => Dtype::INT32,
    i64 => Dtype::INT64,
    u8 => Dtype::UINT8,
    u16 => Dtype::UINT16,
    bool => Dtype::BOOL,
}

impl Dtype {
    /// Returns the canonical dtype for `T`.
    pub const fn of<T: NativeType>() -> Dtype {
        T::DTYPE
    }

    /// Returns the canonical dtype for `T`, or an error if `T` has none.
    ///
    /// Useful in generic code that only knows `T: 'static`. Never falls
    /// back to [`Dtype::UNDEFINED`].
    pub fn try_of<T: ?Sized + 'static>() -> Result<Dtype, DtypeError> {
        lookup(TypeId::of::<T>()).ok_or_else(|| {
            let name = type_name::<T>();
            tracing::debug!(type_name = name, "no canonical dtype for native type");
            DtypeError::unsupported(name)
        })
    }
}
