#![allow(clippy::useless_conversion)]

use pyo3::basic::CompareOp;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyModule};

use crate::utils::{self, to_py_err};
use pcrhelper_core::seq::SeqBytes;
use pcrhelper_core::{DnaSeq, RnaSeq};

#[allow(clippy::upper_case_acronyms)]
#[pyclass(frozen)]
pub struct DNA {
    pub(crate) inner: DnaSeq,
}

#[pymethods]
impl DNA {
    /// Normalizes its input: whitespace is dropped and letters are uppercased.
    #[new]
    fn new(seq: &Bound<'_, PyAny>) -> PyResult<Self> {
        let text = utils::extract_text(seq)?;
        let inner = pcrhelper_core::normalize(&text).map_err(to_py_err)?;
        Ok(Self { inner })
    }

    fn transcribe(&self) -> RNA {
        RNA {
            inner: self.inner.transcribe(),
        }
    }

    fn count(&self, base: &str) -> usize {
        match base.as_bytes() {
            [b] => self.inner.count(b.to_ascii_uppercase()),
            _ => 0,
        }
    }

    fn to_bytes<'py>(&self, py: Python<'py>) -> Bound<'py, PyBytes> {
        PyBytes::new_bound(py, self.inner.as_bytes())
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __richcmp__(&self, other: &Bound<'_, PyAny>, op: CompareOp) -> PyResult<bool> {
        let other = match other.extract::<PyRef<'_, DNA>>() {
            Ok(dna) => dna.inner.as_str().to_owned(),
            Err(_) => utils::extract_text(other)?,
        };

        match op {
            CompareOp::Eq => Ok(self.inner.as_str() == other),
            CompareOp::Ne => Ok(self.inner.as_str() != other),
            CompareOp::Lt => Ok(self.inner.as_str() < other.as_str()),
            CompareOp::Le => Ok(self.inner.as_str() <= other.as_str()),
            CompareOp::Gt => Ok(self.inner.as_str() > other.as_str()),
            CompareOp::Ge => Ok(self.inner.as_str() >= other.as_str()),
        }
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("DNA({:?})", self.inner.as_str())
    }
}

#[allow(clippy::upper_case_acronyms)]
#[pyclass(frozen)]
pub struct RNA {
    pub(crate) inner: RnaSeq,
}

#[pymethods]
impl RNA {
    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __str__(&self) -> String {
        self.inner.to_string()
    }

    fn __repr__(&self) -> String {
        format!("RNA({:?})", self.inner.as_str())
    }

    fn is_canonical(&self) -> bool {
        self.inner.is_canonical()
    }
}

/// Clean and validate raw text. Raises `ValueError` for empty input or
/// characters other than A, T, G, C.
#[pyfunction]
fn normalize(raw: &Bound<'_, PyAny>) -> PyResult<DNA> {
    DNA::new(raw)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<DNA>()?;
    m.add_class::<RNA>()?;
    m.add_function(wrap_pyfunction!(normalize, m)?)?;
    Ok(())
}
