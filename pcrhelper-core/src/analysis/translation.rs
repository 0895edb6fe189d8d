use crate::codon::{self, CodonMeaning};
use crate::seq::protein::{Protein, Residue};
use crate::seq::rna::RnaSeq;
use tracing::trace;

/// Which of the four mutually exclusive translation states a result is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "snake_case"))]
pub enum TranslationOutcome {
    /// No `AUG` anywhere in the RNA.
    NoStartCodon,
    /// A start codon was found but no residue was emitted.
    ///
    /// [`translate`] always emits `Met` for the start codon itself, so it never
    /// produces this state. It is kept so that hand-built [`Translation`]
    /// values still classify totally.
    StartWithoutResidues,
    /// Translation ended on an in-frame stop codon.
    Terminated,
    /// Translation ran off the end of the sequence without a stop codon.
    Unterminated,
}

impl TranslationOutcome {
    /// Diagnostic for the states that are not a clean start-to-stop read.
    pub fn message(self) -> Option<&'static str> {
        match self {
            TranslationOutcome::NoStartCodon => {
                Some("no start codon (AUG); no amino acids were synthesized")
            }
            TranslationOutcome::StartWithoutResidues => Some("no translatable codons"),
            TranslationOutcome::Unterminated => {
                Some("no stop codon; translation runs off the end of the sequence")
            }
            TranslationOutcome::Terminated => None,
        }
    }
}

/// Residues read from the first start codon, with start/stop indices into the RNA.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Translation {
    pub protein: Protein,
    pub start: Option<usize>,
    pub stop: Option<usize>,
}

impl Translation {
    pub fn has_start(&self) -> bool {
        self.start.is_some()
    }

    pub fn has_stop(&self) -> bool {
        self.stop.is_some()
    }

    pub fn outcome(&self) -> TranslationOutcome {
        match (self.start, self.stop) {
            (None, _) => TranslationOutcome::NoStartCodon,
            _ if self.protein.is_empty() => TranslationOutcome::StartWithoutResidues,
            (Some(_), Some(_)) => TranslationOutcome::Terminated,
            (Some(_), None) => TranslationOutcome::Unterminated,
        }
    }
}

/// Translate from the first `AUG` to the first in-frame stop codon.
///
/// The start search is unframed: `AUG` is accepted at any offset. From there
/// the frame is locked to the start index and codons are read three at a time.
/// The stop codon is recorded but not translated. Reading stops early when
/// fewer than three bases remain.
pub fn translate(rna: &RnaSeq) -> Translation {
    let Some(start) = rna.find_start_codon(0) else {
        return Translation::default();
    };

    let mut protein = Protein::new(Vec::with_capacity((rna.len() - start) / 3));
    protein.push(Residue::Met);

    let mut stop = None;
    let mut i = start + 3;
    while let Some(c) = rna.codon_at(i) {
        match codon::translate_codon(c) {
            CodonMeaning::Stop => {
                stop = Some(i);
                break;
            }
            CodonMeaning::Amino(Residue::Unknown) => {
                trace!(index = i, codon = %String::from_utf8_lossy(c), "codon outside table");
                protein.push(Residue::Unknown);
            }
            CodonMeaning::Amino(r) => protein.push(r),
        }
        i += 3;
    }

    Translation {
        protein,
        start: Some(start),
        stop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(rna: &str) -> Translation {
        translate(&RnaSeq::new_unchecked(rna))
    }

    #[test]
    fn start_found_at_odd_offset() {
        let t = run("CAUGUUUUAA");
        assert_eq!(t.start, Some(1));
        assert_eq!(t.stop, Some(7));
        assert_eq!(t.protein.to_three_letter(), "Met-Phe");
        assert_eq!(t.outcome(), TranslationOutcome::Terminated);
    }

    #[test]
    fn out_of_frame_stop_is_ignored() {
        // UAA at index 4 is not in frame with the start at 0
        let t = run("AUGUUAAGG");
        assert_eq!(t.stop, None);
        assert_eq!(t.protein.to_three_letter(), "Met-Leu-Arg");
        assert_eq!(t.outcome(), TranslationOutcome::Unterminated);
    }

    #[test]
    fn stop_right_after_start_still_emits_met() {
        let t = run("AUGUGA");
        assert_eq!(t.start, Some(0));
        assert_eq!(t.stop, Some(3));
        assert_eq!(t.protein.to_three_letter(), "Met");
        assert_eq!(t.outcome(), TranslationOutcome::Terminated);
    }

    #[test]
    fn trailing_partial_codon_is_dropped() {
        let t = run("AUGAAAUG");
        assert_eq!(t.protein.to_three_letter(), "Met-Lys");
        assert_eq!(t.stop, None);
    }

    #[test]
    fn later_aug_inside_frame_is_methionine() {
        let t = run("AUGAUGUAG");
        assert_eq!(t.start, Some(0));
        assert_eq!(t.protein.to_three_letter(), "Met-Met");
        assert_eq!(t.stop, Some(6));
    }

    #[test]
    fn no_start_codon() {
        let t = run("GGGCCC");
        assert_eq!(t, Translation::default());
        assert_eq!(t.outcome(), TranslationOutcome::NoStartCodon);
        assert!(t.outcome().message().is_some());
    }

    #[test]
    fn too_short_for_any_codon() {
        assert_eq!(run("AU").outcome(), TranslationOutcome::NoStartCodon);
        assert_eq!(run("").outcome(), TranslationOutcome::NoStartCodon);
    }

    #[test]
    fn start_without_residues_only_by_construction() {
        let t = Translation {
            protein: Protein::default(),
            start: Some(0),
            stop: Some(3),
        };
        assert_eq!(t.outcome(), TranslationOutcome::StartWithoutResidues);
        assert_eq!(t.outcome().message(), Some("no translatable codons"));
    }

    #[test]
    fn terminated_has_no_message() {
        assert_eq!(TranslationOutcome::Terminated.message(), None);
    }
}
