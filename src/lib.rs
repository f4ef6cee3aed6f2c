//! scalar-dtype — runtime element-type tags for numeric containers.
//!
//! A [`Dtype`] records what kind of scalar a tensor or array holds: a
//! category code and the byte width of one element. Values are immutable,
//! `Copy`, and compare structurally.
//!
//! # Architecture
//!
//! - **`types`** — `Dtype` and its `DtypeCode` category
//! - **`registry`** — the canonical dtypes (`Dtype::FLOAT32`, `Dtype::BOOL`, ...) and name lookup
//! - **`native`** — mapping from Rust scalar types (`f32`, `i64`, `bool`, ...) to dtypes
//! - **`error`** — lookup errors
//! - **`python`** — Python bindings (feature-gated)
//!
//! ```
//! use scalar_dtype::{Dtype, DtypeCode};
//!
//! assert_eq!(Dtype::of::<f32>(), Dtype::FLOAT32);
//! assert_eq!(Dtype::new(DtypeCode::UInt, 2), Dtype::UINT16);
//! assert_ne!(Dtype::BOOL, Dtype::UINT8);
//! assert!(Dtype::try_of::<u32>().is_err());
//! ```

pub mod error;
pub mod native;
pub mod registry;
pub mod types;

#[cfg(feature = "python")]
pub mod python;

pub use error::DtypeError;
pub use native::NativeType;
pub use types::{Dtype, DtypeCode};
