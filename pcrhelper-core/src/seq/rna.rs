use crate::alphabets::rna;
use crate::codon::START_CODON;
use crate::seq::traits::SeqBytes;
use std::fmt;

/// RNA produced by transcription. Same length and indexing as its DNA source.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RnaSeq {
    seq: String,
}

impl RnaSeq {
    #[inline]
    pub(crate) fn from_transcript(seq: String) -> Self {
        Self { seq }
    }

    /// Wrap arbitrary text without checking it against `{A,C,G,U}`.
    ///
    /// Translation stays total over such input: codons it cannot look up
    /// become `Xxx`.
    pub fn new_unchecked(seq: impl Into<String>) -> Self {
        Self { seq: seq.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.seq
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.seq.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// True when every symbol is one of `A`, `C`, `G`, `U`.
    pub fn is_canonical(&self) -> bool {
        rna::alphabet().is_word(self.as_bytes())
    }

    /// The three bytes starting at `i`, if a full codon fits.
    pub fn codon_at(&self, i: usize) -> Option<&[u8]> {
        self.as_bytes().get(i..i.checked_add(3)?)
    }

    /// Index of the first `AUG` at or after `from`, regardless of frame.
    pub fn find_start_codon(&self, from: usize) -> Option<usize> {
        self.find_from(START_CODON, from)
    }
}

impl SeqBytes for RnaSeq {
    fn as_bytes(&self) -> &[u8] {
        RnaSeq::as_bytes(self)
    }
}

impl fmt::Display for RnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.seq)
    }
}
