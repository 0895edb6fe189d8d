#![allow(clippy::useless_conversion)]

use std::time::{SystemTime, UNIX_EPOCH};

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule};

use crate::dna::{DNA, RNA};
use crate::utils::{self, to_py_err};
use pcrhelper_core::alphabets::dna::BASES;
use pcrhelper_core::config::{RandomConfig, RANDOM_DEFAULT_LEN};
use pcrhelper_core::{random, AnalysisResult, DnaSeq, TranslationOutcome};

#[pyclass(frozen, name = "AnalysisResult")]
pub struct PyAnalysisResult {
    inner: AnalysisResult,
}

#[pymethods]
impl PyAnalysisResult {
    #[getter]
    fn dna(&self) -> DNA {
        DNA {
            inner: self.inner.dna.clone(),
        }
    }

    #[getter]
    fn length(&self) -> usize {
        self.inner.length()
    }

    /// `{"A": n, "T": n, "G": n, "C": n}`
    #[getter]
    fn base_counts<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let out = PyDict::new_bound(py);
        for (base, count, _) in self.inner.composition.iter() {
            out.set_item(base.to_string(), count)?;
        }
        Ok(out)
    }

    #[getter]
    fn base_percentages<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyDict>> {
        let out = PyDict::new_bound(py);
        for (base, _, pct) in self.inner.composition.iter() {
            out.set_item(base.to_string(), pct)?;
        }
        Ok(out)
    }

    #[getter]
    fn gc_content(&self) -> f64 {
        self.inner.composition.gc_content()
    }

    #[getter]
    fn rna(&self) -> RNA {
        RNA {
            inner: self.inner.rna.clone(),
        }
    }

    /// Residues joined by `-`.
    #[getter]
    fn protein(&self) -> String {
        self.inner.protein_string()
    }

    /// One-letter codes, `X` for unknown.
    #[getter]
    fn protein_one_letter(&self) -> String {
        self.inner.protein().to_one_letter()
    }

    #[getter]
    fn residues(&self) -> Vec<&'static str> {
        self.inner
            .protein()
            .residues()
            .iter()
            .map(|r| r.three_letter())
            .collect()
    }

    #[getter]
    fn start_codon_index(&self) -> Option<usize> {
        self.inner.start_codon_index()
    }

    #[getter]
    fn stop_codon_index(&self) -> Option<usize> {
        self.inner.stop_codon_index()
    }

    #[getter]
    fn has_start_codon(&self) -> bool {
        self.inner.has_start_codon()
    }

    #[getter]
    fn has_stop_codon(&self) -> bool {
        self.inner.has_stop_codon()
    }

    /// One of `no_start_codon`, `start_without_residues`, `terminated`, `unterminated`.
    #[getter]
    fn outcome(&self) -> &'static str {
        match self.inner.outcome() {
            TranslationOutcome::NoStartCodon => "no_start_codon",
            TranslationOutcome::StartWithoutResidues => "start_without_residues",
            TranslationOutcome::Terminated => "terminated",
            TranslationOutcome::Unterminated => "unterminated",
        }
    }

    #[getter]
    fn message(&self) -> Option<&'static str> {
        self.inner.message()
    }

    fn __repr__(&self) -> String {
        format!(
            "AnalysisResult(length={}, protein={:?}, start={:?}, stop={:?})",
            self.inner.length(),
            self.inner.protein_string(),
            self.inner.start_codon_index(),
            self.inner.stop_codon_index(),
        )
    }
}

fn extract_dna(obj: &Bound<'_, PyAny>) -> PyResult<DnaSeq> {
    if let Ok(dna) = obj.extract::<PyRef<'_, DNA>>() {
        return Ok(dna.inner.clone());
    }
    let text = utils::extract_text(obj)
        .map_err(|_| PyTypeError::new_err("expected DNA, str, or bytes-like object"))?;
    pcrhelper_core::normalize(&text).map_err(to_py_err)
}

/// Analyze a `DNA` object or raw text (normalized first).
#[pyfunction]
fn analyze(dna: &Bound<'_, PyAny>) -> PyResult<PyAnalysisResult> {
    let dna = extract_dna(dna)?;
    Ok(PyAnalysisResult {
        inner: pcrhelper_core::analyze(&dna),
    })
}

/// Validate every input first, then analyze the whole batch without the GIL.
#[pyfunction]
fn analyze_many(py: Python<'_>, seqs: &Bound<'_, PyAny>) -> PyResult<Vec<PyAnalysisResult>> {
    let mut dna = Vec::new();
    for item in seqs.iter()? {
        dna.push(extract_dna(&item?)?);
    }

    let results = py.allow_threads(|| pcrhelper_core::analyze_many(&dna));
    Ok(results
        .into_iter()
        .map(|inner| PyAnalysisResult { inner })
        .collect())
}

#[pyfunction]
#[pyo3(signature = (length=RANDOM_DEFAULT_LEN, seed=None))]
fn random_dna(length: usize, seed: Option<u64>) -> PyResult<DNA> {
    let seed = seed.unwrap_or_else(clock_seed);
    let inner = random::random_dna(&RandomConfig { length, seed }).map_err(to_py_err)?;
    Ok(DNA { inner })
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyAnalysisResult>()?;
    m.add_function(wrap_pyfunction!(analyze, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_many, m)?)?;
    m.add_function(wrap_pyfunction!(random_dna, m)?)?;
    m.add("BASES", String::from_utf8_lossy(&BASES).into_owned())?;
    Ok(())
}
