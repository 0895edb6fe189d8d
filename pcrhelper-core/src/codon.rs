//! The standard genetic code over RNA codons.
//!
//! 64 entries, indexed by `16 * b1 + 4 * b2 + b3` with `A=0, C=1, G=2, U=3`.
//! Three codons are stops (`UAA`, `UAG`, `UGA`) and `AUG` is the only start.

use crate::seq::protein::Residue;
use std::sync::LazyLock;

pub const START_CODON: &[u8; 3] = b"AUG";
pub const STOP_CODONS: [&[u8; 3]; 3] = [b"UAA", b"UAG", b"UGA"];

/// What a single codon encodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CodonMeaning {
    Amino(Residue),
    Stop,
}

impl CodonMeaning {
    /// Three-letter code, or `Stop`.
    pub fn label(self) -> &'static str {
        match self {
            CodonMeaning::Amino(r) => r.three_letter(),
            CodonMeaning::Stop => "Stop",
        }
    }
}

/// Look up one codon. Anything that is not three symbols from `{A,C,G,U}`
/// maps to [`Residue::Unknown`].
pub fn translate_codon(codon: &[u8]) -> CodonMeaning {
    match codon_index(codon) {
        Some(idx) => CODON_TABLE[idx],
        None => CodonMeaning::Amino(Residue::Unknown),
    }
}

/// Every `(codon, meaning)` pair of the table in index order.
pub fn table() -> impl Iterator<Item = ([u8; 3], CodonMeaning)> {
    (0..64).map(|idx| (index_to_codon(idx), CODON_TABLE[idx]))
}

fn codon_index(codon: &[u8]) -> Option<usize> {
    let [b1, b2, b3] = <[u8; 3]>::try_from(codon).ok()?;
    let i1 = BASE_INDEX[b1 as usize];
    let i2 = BASE_INDEX[b2 as usize];
    let i3 = BASE_INDEX[b3 as usize];
    if i1 < 4 && i2 < 4 && i3 < 4 {
        Some(((i1 as usize) << 4) | ((i2 as usize) << 2) | (i3 as usize))
    } else {
        None
    }
}

fn index_to_codon(idx: usize) -> [u8; 3] {
    const BASES: [u8; 4] = *b"ACGU";
    [BASES[idx >> 4], BASES[(idx >> 2) & 3], BASES[idx & 3]]
}

// Uppercase only: lowercase RNA is not part of the table's key space.
static BASE_INDEX: LazyLock<[u8; 256]> = LazyLock::new(|| {
    let mut map = [255u8; 256];
    map[b'A' as usize] = 0;
    map[b'C' as usize] = 1;
    map[b'G' as usize] = 2;
    map[b'U' as usize] = 3;
    map
});

const CODON_TABLE: [CodonMeaning; 64] = {
    use CodonMeaning::{Amino as A, Stop};
    use Residue::*;
    [
        A(Lys), A(Asn), A(Lys), A(Asn), // AA*
        A(Thr), A(Thr), A(Thr), A(Thr), // AC*
        A(Arg), A(Ser), A(Arg), A(Ser), // AG*
        A(Ile), A(Ile), A(Met), A(Ile), // AU*
        A(Gln), A(His), A(Gln), A(His), // CA*
        A(Pro), A(Pro), A(Pro), A(Pro), // CC*
        A(Arg), A(Arg), A(Arg), A(Arg), // CG*
        A(Leu), A(Leu), A(Leu), A(Leu), // CU*
        A(Glu), A(Asp), A(Glu), A(Asp), // GA*
        A(Ala), A(Ala), A(Ala), A(Ala), // GC*
        A(Gly), A(Gly), A(Gly), A(Gly), // GG*
        A(Val), A(Val), A(Val), A(Val), // GU*
        Stop, A(Tyr), Stop, A(Tyr),     // UA*
        A(Ser), A(Ser), A(Ser), A(Ser), // UC*
        Stop, A(Cys), A(Trp), A(Cys),   // UG*
        A(Leu), A(Phe), A(Leu), A(Phe), // UU*
    ]
};
