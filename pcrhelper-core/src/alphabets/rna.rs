use crate::alphabets::Alphabet;

/// Canonical RNA: uppercase `A`, `C`, `G`, `U`.
pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGU")
}
