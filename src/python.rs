//! Python bindings for [`Dtype`].
//!
//! Exposes a frozen `Dtype` class carrying the canonical instances as class
//! attributes, plus the `UnsupportedTypeError` exception.

#![allow(non_snake_case)]

use pyo3::create_exception;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyFloat, PyInt, PyType};

use crate::error::DtypeError;
use crate::types::Dtype;

create_exception!(
    scalar_dtype,
    UnsupportedTypeError,
    PyTypeError,
    "Raised when a type has no canonical Dtype."
);

impl From<DtypeError> for PyErr {
    fn from(e: DtypeError) -> Self {
        UnsupportedTypeError::new_err(e.to_string())
    }
}

/// Python-facing wrapper around [`Dtype`].
#[pyclass(name = "Dtype", module = "scalar_dtype", frozen)]
#[derive(Debug, Clone, Copy)]
pub struct PyDtype(pub Dtype);

impl From<Dtype> for PyDtype {
    fn from(dtype: Dtype) -> Self {
        Self(dtype)
    }
}

#[pymethods]
impl PyDtype {
    #[classattr]
    fn Undefined() -> Self {
        Self(Dtype::UNDEFINED)
    }

    #[classattr]
    fn Float32() -> Self {
        Self(Dtype::FLOAT32)
    }

    #[classattr]
    fn Float64() -> Self {
        Self(Dtype::FLOAT64)
    }

    #[classattr]
    fn Int32() -> Self {
        Self(Dtype::INT32)
    }

    #[classattr]
    fn Int64() -> Self {
        Self(Dtype::INT64)
    }

    #[classattr]
    fn UInt8() -> Self {
        Self(Dtype::UINT8)
    }

    #[classattr]
    fn UInt16() -> Self {
        Self(Dtype::UINT16)
    }

    #[classattr]
    fn Bool() -> Self {
        Self(Dtype::BOOL)
    }

    /// Maps a Python builtin type (`bool`, `int`, `float`) to its Dtype.
    #[staticmethod]
    fn from_type(ty: &Bound<'_, PyType>) -> PyResult<Self> {
        // `bool` subclasses `int`, so it must be checked first.
        let dtype = if ty.is_subclass_of::<PyBool>()? {
            Dtype::BOOL
        } else if ty.is_subclass_of::<PyInt>()? {
            Dtype::INT64
        } else if ty.is_subclass_of::<PyFloat>()? {
            Dtype::FLOAT64
        } else {
            let name = ty.name()?.to_string();
            tracing::debug!(type_name = %name, "no canonical dtype for Python type");
            return Err(DtypeError::unsupported(name).into());
        };
        Ok(Self(dtype))
    }

    fn byte_size(&self) -> i64 {
        self.0.byte_size()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __ne__(&self, other: &Self) -> bool {
        self.0 != other.0
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{DefaultHasher, Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Dtype.{}", self.0)
    }
}

/// The `scalar_dtype` Python module.
#[pymodule]
fn scalar_dtype(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDtype>()?;
    m.add("UnsupportedTypeError", m.py().get_type::<UnsupportedTypeError>())?;
    tracing::debug!("registered scalar_dtype bindings");
    Ok(())
}
