use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyString;

use pcrhelper_core::PcrError;

pub fn to_py_err(e: PcrError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Accept `str` or bytes-like input as text.
pub fn extract_text(obj: &Bound<'_, PyAny>) -> PyResult<String> {
    if let Ok(s) = obj.downcast::<PyString>() {
        return Ok(s.to_str()?.to_owned());
    }

    let bytes = obj
        .extract::<Vec<u8>>()
        .map_err(|_| PyTypeError::new_err("expected str or bytes-like object"))?;
    String::from_utf8(bytes).map_err(|e| PyValueError::new_err(e.to_string()))
}
