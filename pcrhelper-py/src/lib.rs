use pyo3::prelude::*;

mod analysis;
mod dna;
mod history;
mod utils;

#[pymodule]
fn _native(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    dna::register(m)?;
    analysis::register(m)?;
    history::register(m)?;
    Ok(())
}
