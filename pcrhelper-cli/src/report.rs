//! Text and JSON rendering of an analysis.

use serde::Serialize;
use std::fmt::Write;

use pcrhelper_core::history::default_preview;
use pcrhelper_core::{AnalysisResult, History, Protein, TranslationOutcome};

/// Flat JSON shape of one analysis.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Record<'a> {
    pub dna_sequence: &'a str,
    pub dna_length: usize,
    pub base_counts: PerBase<usize>,
    pub base_percentages: PerBase<f64>,
    pub gc_content: f64,
    pub rna_sequence: &'a str,
    pub protein_sequence: String,
    pub residues: &'a Protein,
    pub start_codon_index: Option<usize>,
    pub stop_codon_index: Option<usize>,
    pub has_start_codon: bool,
    pub has_stop_codon: bool,
    pub outcome: TranslationOutcome,
    pub message: Option<&'static str>,
}

#[derive(Debug, Serialize)]
pub struct PerBase<T> {
    #[serde(rename = "A")]
    pub a: T,
    #[serde(rename = "T")]
    pub t: T,
    #[serde(rename = "G")]
    pub g: T,
    #[serde(rename = "C")]
    pub c: T,
}

impl<T: Copy> PerBase<T> {
    fn from_ordered(v: &[T; 4]) -> Self {
        Self {
            a: v[0],
            t: v[1],
            g: v[2],
            c: v[3],
        }
    }
}

impl<'a> Record<'a> {
    pub fn new(result: &'a AnalysisResult) -> Self {
        Self {
            dna_sequence: result.dna.as_str(),
            dna_length: result.length(),
            base_counts: PerBase::from_ordered(result.base_counts()),
            base_percentages: PerBase::from_ordered(result.base_percentages()),
            gc_content: result.composition.gc_content(),
            rna_sequence: result.rna.as_str(),
            protein_sequence: result.protein_string(),
            residues: result.protein(),
            start_codon_index: result.start_codon_index(),
            stop_codon_index: result.stop_codon_index(),
            has_start_codon: result.has_start_codon(),
            has_stop_codon: result.has_stop_codon(),
            outcome: result.outcome(),
            message: result.message(),
        }
    }
}

pub fn to_json(result: &AnalysisResult) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&Record::new(result))
}

/// RNA between `5'` and `3'` markers with the start and stop codons bracketed.
pub fn annotate_rna(rna: &str, start: Option<usize>, stop: Option<usize>) -> String {
    let bytes = rna.as_bytes();
    let mut out = String::with_capacity(bytes.len() + 12);
    out.push_str("5' ");

    let mut i = 0;
    while i < bytes.len() {
        if Some(i) == start || Some(i) == stop {
            let end = (i + 3).min(bytes.len());
            out.push('[');
            out.push_str(&rna[i..end]);
            out.push(']');
            i = end;
            continue;
        }
        out.push(bytes[i] as char);
        i += 1;
    }

    out.push_str(" 3'");
    out
}

/// Multi-line report for a terminal.
pub fn render(result: &AnalysisResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Length: {} bp", result.length());
    out.push('\n');

    out.push_str("Base composition\n");
    for (base, count, pct) in result.composition.iter() {
        let _ = writeln!(out, "  {base}  {count:>8}  {pct:>6.2}%");
    }
    let _ = writeln!(out, "  GC  {:>17.2}%", result.composition.gc_content());
    out.push('\n');

    out.push_str("RNA\n");
    let _ = writeln!(
        out,
        "  {}",
        annotate_rna(
            result.rna.as_str(),
            result.start_codon_index(),
            result.stop_codon_index()
        )
    );
    out.push('\n');

    out.push_str("Protein\n");
    match result.outcome() {
        TranslationOutcome::NoStartCodon | TranslationOutcome::StartWithoutResidues => {
            let _ = writeln!(out, "  {}", result.message().unwrap_or("-"));
        }
        TranslationOutcome::Terminated => {
            let _ = writeln!(out, "  {}", result.protein_string());
        }
        TranslationOutcome::Unterminated => {
            let _ = writeln!(out, "  {}", result.protein_string());
            if let Some(msg) = result.message() {
                let _ = writeln!(out, "  note: {msg}");
            }
        }
    }

    out
}

pub fn render_history(history: &History) -> String {
    if history.is_empty() {
        return "No saved inputs.\n".to_owned();
    }
    let mut out = String::new();
    for (i, entry) in history.iter().enumerate() {
        let _ = writeln!(out, "{:>2}. {}", i + 1, default_preview(entry));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcrhelper_core::analyze_str;

    #[test]
    fn annotate_brackets_start_and_stop() {
        assert_eq!(
            annotate_rna("AUGUUUUAA", Some(0), Some(6)),
            "5' [AUG]UUU[UAA] 3'"
        );
        assert_eq!(annotate_rna("GGGCCC", None, None), "5' GGGCCC 3'");
        assert_eq!(
            annotate_rna("CCAUGAAA", Some(2), None),
            "5' CC[AUG]AAA 3'"
        );
    }

    #[test]
    fn render_terminated() {
        let result = analyze_str("ATGTTTTAA").unwrap();
        let text = render(&result);
        assert!(text.starts_with("Length: 9 bp\n"));
        assert!(text.contains("  A         3   33.33%"));
        assert!(text.contains("  C         0    0.00%"));
        assert!(text.contains("5' [AUG]UUU[UAA] 3'"));
        assert!(text.contains("  Met-Phe\n"));
        assert!(!text.contains("note:"));
    }

    #[test]
    fn render_unterminated_adds_note() {
        let text = render(&analyze_str("ATGAAA").unwrap());
        assert!(text.contains("  Met-Lys\n"));
        assert!(text.contains("note: no stop codon"));
    }

    #[test]
    fn render_no_start() {
        let text = render(&analyze_str("GGGCCC").unwrap());
        assert!(text.contains("no start codon (AUG)"));
    }

    #[test]
    fn json_record_shape() {
        let result = analyze_str("ATGTTTTAA").unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert_eq!(value["dnaLength"], 9);
        assert_eq!(value["baseCounts"]["T"], 5);
        assert_eq!(value["rnaSequence"], "AUGUUUUAA");
        assert_eq!(value["proteinSequence"], "Met-Phe");
        assert_eq!(value["residues"], serde_json::json!(["Met", "Phe"]));
        assert_eq!(value["startCodonIndex"], 0);
        assert_eq!(value["stopCodonIndex"], 6);
        assert_eq!(value["hasStopCodon"], true);
        assert_eq!(value["outcome"], "terminated");
        assert!(value["message"].is_null());
    }

    #[test]
    fn json_record_without_start() {
        let result = analyze_str("GGGCCC").unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&result).unwrap()).unwrap();
        assert!(value["startCodonIndex"].is_null());
        assert_eq!(value["hasStartCodon"], false);
        assert_eq!(value["outcome"], "no_start_codon");
        assert_eq!(value["proteinSequence"], "");
    }

    #[test]
    fn history_listing() {
        let mut history = History::new();
        assert_eq!(render_history(&history), "No saved inputs.\n");
        history.record(&"A".repeat(60));
        history.record("ATG");
        let text = render_history(&history);
        assert!(text.starts_with(" 1. ATG\n"));
        assert!(text.contains(&format!(" 2. {}...", "A".repeat(50))));
    }
}
