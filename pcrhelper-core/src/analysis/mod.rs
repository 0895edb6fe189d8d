pub mod composition;
pub mod translation;

pub use composition::BaseComposition;
pub use translation::{translate, Translation, TranslationOutcome};

use crate::config::AnalyzerConfig;
use crate::error::PcrResult;
use crate::seq::dna::{normalize_with, DnaSeq};
use crate::seq::protein::Protein;
use crate::seq::rna::RnaSeq;
use tracing::debug;

/// Everything computed for one DNA sequence.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisResult {
    pub dna: DnaSeq,
    pub composition: BaseComposition,
    pub rna: RnaSeq,
    pub translation: Translation,
}

impl AnalysisResult {
    /// Sequence length in bases (always at least 1).
    pub fn length(&self) -> usize {
        self.dna.len()
    }

    /// Counts in `A`, `T`, `G`, `C` order.
    pub fn base_counts(&self) -> &[usize; 4] {
        self.composition.counts()
    }

    /// Percentages in `A`, `T`, `G`, `C` order.
    pub fn base_percentages(&self) -> &[f64; 4] {
        self.composition.percentages()
    }

    pub fn protein(&self) -> &Protein {
        &self.translation.protein
    }

    /// Residues joined by `-`; empty when there was no start codon.
    pub fn protein_string(&self) -> String {
        self.translation.protein.to_three_letter()
    }

    pub fn start_codon_index(&self) -> Option<usize> {
        self.translation.start
    }

    pub fn stop_codon_index(&self) -> Option<usize> {
        self.translation.stop
    }

    pub fn has_start_codon(&self) -> bool {
        self.translation.has_start()
    }

    pub fn has_stop_codon(&self) -> bool {
        self.translation.has_stop()
    }

    pub fn outcome(&self) -> TranslationOutcome {
        self.translation.outcome()
    }

    /// Human-readable note for incomplete translations, kept apart from the protein.
    pub fn message(&self) -> Option<&'static str> {
        self.outcome().message()
    }
}

/// Length, composition, transcription and translation of a validated sequence.
pub fn analyze(dna: &DnaSeq) -> AnalysisResult {
    let composition = BaseComposition::of(dna);
    let rna = dna.transcribe();
    let translation = translate(&rna);

    debug!(
        len = dna.len(),
        start = ?translation.start,
        stop = ?translation.stop,
        residues = translation.protein.len(),
        "analyzed sequence"
    );

    AnalysisResult {
        dna: dna.clone(),
        composition,
        rna,
        translation,
    }
}

/// Normalize raw text, then analyze it.
pub fn analyze_str(raw: &str) -> PcrResult<AnalysisResult> {
    analyze_with(raw, &AnalyzerConfig::default())
}

pub fn analyze_with(raw: &str, config: &AnalyzerConfig) -> PcrResult<AnalysisResult> {
    let dna = normalize_with(raw, config)?;
    Ok(analyze(&dna))
}

/// Analyze independent sequences, in parallel when the `parallel` feature is on.
/// Output order matches input order.
pub fn analyze_many(seqs: &[DnaSeq]) -> Vec<AnalysisResult> {
    par_map!(seqs, analyze)
}
