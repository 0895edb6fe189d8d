use pyo3::exceptions::PyIndexError;
use pyo3::prelude::*;
use pyo3::types::PyModule;

use pcrhelper_core::config::{HISTORY_CAPACITY, HISTORY_PREVIEW_LEN};
use pcrhelper_core::history;

/// Recent raw inputs, most recent first, deduplicated, capped.
#[pyclass(name = "History")]
pub struct PyHistory {
    inner: history::History,
}

#[pymethods]
impl PyHistory {
    #[new]
    #[pyo3(signature = (entries=None, capacity=HISTORY_CAPACITY))]
    fn new(entries: Option<Vec<String>>, capacity: usize) -> Self {
        let mut inner = history::History::with_capacity(capacity);
        if let Some(entries) = entries {
            // oldest first so that the first listed entry ends up on top
            for entry in entries.iter().rev() {
                inner.record(entry);
            }
        }
        Self { inner }
    }

    fn record(&mut self, raw: &str) {
        self.inner.record(raw);
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn entries(&self) -> Vec<String> {
        self.inner.to_vec()
    }

    #[pyo3(signature = (max=HISTORY_PREVIEW_LEN))]
    fn previews(&self, max: usize) -> Vec<String> {
        self.inner
            .iter()
            .map(|e| history::preview(e, max).into_owned())
            .collect()
    }

    #[getter]
    fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __getitem__(&self, index: isize) -> PyResult<String> {
        let n = self.inner.len() as isize;
        let i = if index < 0 { index + n } else { index };
        if i < 0 || i >= n {
            return Err(PyIndexError::new_err("index out of range"));
        }
        self.inner
            .get(i as usize)
            .map(str::to_owned)
            .ok_or_else(|| PyIndexError::new_err("index out of range"))
    }

    fn __repr__(&self) -> String {
        format!("History({:?})", self.inner.to_vec())
    }
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyHistory>()?;
    Ok(())
}
