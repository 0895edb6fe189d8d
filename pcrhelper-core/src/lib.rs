//! Sequence analysis engine behind the PCR helper: input validation, base
//! composition, DNA to RNA transcription and start/stop-aware translation.
//!
//! ```rust
//! use pcrhelper_core::{analyze, normalize};
//!
//! let dna = normalize("atg ttt taa").unwrap();
//! let result = analyze(&dna);
//! assert_eq!(result.rna.as_str(), "AUGUUUUAA");
//! assert_eq!(result.protein_string(), "Met-Phe");
//! assert_eq!(result.stop_codon_index(), Some(6));
//! ```

#[macro_use]
mod par;

pub mod alphabets;
pub mod analysis;
pub mod codon;
pub mod config;
pub mod error;
pub mod history;
pub mod random;
pub mod seq;

pub use analysis::{
    analyze, analyze_many, analyze_str, analyze_with, AnalysisResult, BaseComposition,
    Translation, TranslationOutcome,
};
pub use error::{PcrError, PcrResult};
pub use history::{History, HistoryStore};
pub use seq::{normalize, normalize_with, DnaSeq, Protein, Residue, RnaSeq};
