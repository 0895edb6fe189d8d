use crate::alphabets::dna;
use crate::config::AnalyzerConfig;
use crate::error::{PcrError, PcrResult};
use crate::seq::rna::RnaSeq;
use crate::seq::traits::SeqBytes;
use std::fmt;
use std::str::FromStr;

/// A validated DNA sequence: non-empty, uppercase, only `A`, `T`, `G`, `C`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DnaSeq {
    seq: String,
}

impl DnaSeq {
    /// Validate already-canonical bytes. Lowercase or whitespace is rejected;
    /// use [`normalize`] for raw user text.
    pub fn new(bytes: Vec<u8>) -> PcrResult<Self> {
        if bytes.is_empty() {
            return Err(PcrError::EmptySequence);
        }
        if let Some((pos, b)) = dna::ALPHABET.first_mismatch(&bytes) {
            return Err(PcrError::InvalidCharacter {
                ch: b as char,
                pos,
            });
        }
        Ok(Self::from_bytes_unchecked(bytes))
    }

    #[inline]
    pub(crate) fn from_bytes_unchecked(bytes: Vec<u8>) -> Self {
        Self {
            seq: bytes.into_iter().map(char::from).collect(),
        }
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

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Position-preserving T -> U substitution.
    pub fn transcribe(&self) -> RnaSeq {
        let rna = self
            .as_bytes()
            .iter()
            .map(|&b| char::from(dna::transcribe_base(b)))
            .collect::<String>();
        RnaSeq::from_transcript(rna)
    }
}

impl SeqBytes for DnaSeq {
    fn as_bytes(&self) -> &[u8] {
        DnaSeq::as_bytes(self)
    }
}

impl fmt::Display for DnaSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.seq)
    }
}

impl FromStr for DnaSeq {
    type Err = PcrError;

    fn from_str(s: &str) -> PcrResult<Self> {
        normalize(s)
    }
}

impl AsRef<str> for DnaSeq {
    fn as_ref(&self) -> &str {
        &self.seq
    }
}

/// Separators dropped from raw input: the characters matched by a browser's
/// `\s`. That is Unicode whitespace without `U+0085`, plus the byte-order
/// mark `U+FEFF`.
fn is_separator(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// Clean raw text into a canonical DNA sequence.
///
/// Whitespace and byte-order marks anywhere in the input are dropped and
/// letters are uppercased. `U+0085` is not treated as whitespace.
/// Fails with [`PcrError::EmptySequence`] when nothing is left, otherwise with
/// [`PcrError::InvalidCharacter`] for the first symbol outside `{A,T,G,C}`.
/// The reported position indexes the cleaned text.
pub fn normalize(raw: &str) -> PcrResult<DnaSeq> {
    normalize_with(raw, &AnalyzerConfig::default())
}

/// [`normalize`] with an optional length bound from `config`.
pub fn normalize_with(raw: &str, config: &AnalyzerConfig) -> PcrResult<DnaSeq> {
    let cleaned: String = raw
        .chars()
        .filter(|&c| !is_separator(c))
        .flat_map(char::to_uppercase)
        .collect();

    if cleaned.is_empty() {
        return Err(PcrError::EmptySequence);
    }

    for (pos, ch) in cleaned.chars().enumerate() {
        let ok = u8::try_from(ch).map(dna::is_base).unwrap_or(false);
        if !ok {
            return Err(PcrError::InvalidCharacter { ch, pos });
        }
    }

    if let Some(max) = config.max_len {
        if cleaned.len() > max {
            return Err(PcrError::SequenceTooLong {
                len: cleaned.len(),
                max,
            });
        }
    }

    Ok(DnaSeq { seq: cleaned })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_strips_whitespace() {
        let dna = normalize("  atg ttt\n\tTAA  ").unwrap();
        assert_eq!(dna.as_str(), "ATGTTTTAA");
        assert_eq!(dna.len(), 9);
    }

    #[test]
    fn normalize_strips_byte_order_mark() {
        assert_eq!(normalize("\u{FEFF}ATGTTTTAA").unwrap().as_str(), "ATGTTTTAA");
        assert_eq!(normalize("ATG\u{FEFF}\u{A0}TTT\u{2028}").unwrap().as_str(), "ATGTTT");
        assert_eq!(normalize("\u{FEFF}").unwrap_err(), PcrError::EmptySequence);
    }

    #[test]
    fn next_line_control_is_not_whitespace() {
        assert_eq!(
            normalize("ATG\u{85}TTT").unwrap_err(),
            PcrError::InvalidCharacter { ch: '\u{85}', pos: 3 }
        );
    }

    #[test]
    fn normalize_rejects_whitespace_only() {
        assert_eq!(normalize("   ").unwrap_err(), PcrError::EmptySequence);
        assert_eq!(normalize("").unwrap_err(), PcrError::EmptySequence);
        assert_eq!(normalize("\n\t\r ").unwrap_err(), PcrError::EmptySequence);
    }

    #[test]
    fn normalize_reports_first_invalid_character() {
        assert_eq!(
            normalize("ATGXYZ").unwrap_err(),
            PcrError::InvalidCharacter { ch: 'X', pos: 3 }
        );
        // position counts cleaned characters, not raw ones
        assert_eq!(
            normalize("A T G n").unwrap_err(),
            PcrError::InvalidCharacter { ch: 'N', pos: 3 }
        );
        assert_eq!(
            normalize("ATGé").unwrap_err(),
            PcrError::InvalidCharacter { ch: 'É', pos: 3 }
        );
    }

    #[test]
    fn normalize_rejects_rna_input() {
        assert!(matches!(
            normalize("AUG"),
            Err(PcrError::InvalidCharacter { ch: 'U', pos: 1 })
        ));
    }

    #[test]
    fn normalize_with_enforces_max_len() {
        let config = AnalyzerConfig { max_len: Some(4) };
        assert!(normalize_with("ACGT", &config).is_ok());
        assert_eq!(
            normalize_with("ACGTA", &config).unwrap_err(),
            PcrError::SequenceTooLong { len: 5, max: 4 }
        );
    }

    #[test]
    fn new_requires_canonical_bytes() {
        assert!(DnaSeq::new(b"GATTACA".to_vec()).is_ok());
        assert_eq!(DnaSeq::new(Vec::new()).unwrap_err(), PcrError::EmptySequence);
        assert_eq!(
            DnaSeq::new(b"gattaca".to_vec()).unwrap_err(),
            PcrError::InvalidCharacter { ch: 'g', pos: 0 }
        );
    }

    #[test]
    fn from_str_normalizes() {
        let dna: DnaSeq = "acgt".parse().unwrap();
        assert_eq!(dna.to_string(), "ACGT");
    }

    #[test]
    fn count_bases() {
        let dna = normalize("AACGTTT").unwrap();
        assert_eq!(dna.count(b'A'), 2);
        assert_eq!(dna.count(b'C'), 1);
        assert_eq!(dna.count(b'G'), 1);
        assert_eq!(dna.count(b'T'), 3);
    }

    #[test]
    fn transcribe_replaces_t_only() {
        let dna = normalize("ATGTTTTAA").unwrap();
        assert_eq!(dna.transcribe().as_str(), "AUGUUUUAA");
    }
}
