use crate::alphabets::{Alphabet, RankTransform};
use std::sync::LazyLock;

/// Canonical base order used for composition reports.
pub const BASES: [u8; 4] = *b"ATGC";

pub fn alphabet() -> Alphabet {
    Alphabet::new(b"ACGT")
}

pub(crate) static ALPHABET: LazyLock<Alphabet> = LazyLock::new(alphabet);

pub(crate) static RANKS: LazyLock<RankTransform> =
    LazyLock::new(|| RankTransform::new(&ALPHABET));

#[inline]
pub fn is_base(a: u8) -> bool {
    ALPHABET.contains(a)
}

/// DNA to RNA base substitution: `T` becomes `U`, everything else is kept.
#[inline]
pub fn transcribe_base(a: u8) -> u8 {
    match a {
        b'T' => b'U',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn is_word() {
        assert!(alphabet().is_word(b"GATTACA"));
    }

    #[test]
    fn lowercase_is_no_word() {
        assert!(!alphabet().is_word(b"gattaca"));
    }

    #[test]
    fn ambiguous_base_is_no_word() {
        assert!(!alphabet().is_word(b"GANTACA"));
    }

    #[test]
    fn uracil_is_no_word() {
        assert!(!alphabet().is_word(b"GAUUACA"));
    }

    #[test]
    fn transcribe_base_only_touches_t() {
        assert_eq!(transcribe_base(b'T'), b'U');
        assert_eq!(transcribe_base(b'A'), b'A');
        assert_eq!(transcribe_base(b'G'), b'G');
        assert_eq!(transcribe_base(b'C'), b'C');
    }
}
