use crate::alphabets::dna::{BASES, RANKS};
use crate::seq::dna::DnaSeq;

/// Per-base counts and percentages, stored in [`BASES`] order (`A`, `T`, `G`, `C`).
///
/// Percentages are unrounded; display rounding is left to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct BaseComposition {
    counts: [usize; 4],
    percentages: [f64; 4],
}

impl BaseComposition {
    /// Single pass over the sequence; counts always sum to `dna.len()`.
    pub fn of(dna: &DnaSeq) -> Self {
        let by_rank = RANKS.rank_counts(dna.as_bytes());
        let mut counts = [0usize; 4];
        for (slot, &base) in counts.iter_mut().zip(BASES.iter()) {
            if let Some(r) = RANKS.get(base) {
                *slot = by_rank[r as usize];
            }
        }

        let len = dna.len() as f64;
        let mut percentages = [0.0f64; 4];
        if len > 0.0 {
            for (p, &c) in percentages.iter_mut().zip(counts.iter()) {
                *p = c as f64 / len * 100.0;
            }
        }

        Self {
            counts,
            percentages,
        }
    }

    pub fn counts(&self) -> &[usize; 4] {
        &self.counts
    }

    pub fn percentages(&self) -> &[f64; 4] {
        &self.percentages
    }

    /// Count for `base` (uppercase `A`, `T`, `G` or `C`); 0 for anything else.
    pub fn count(&self, base: u8) -> usize {
        slot(base).map(|i| self.counts[i]).unwrap_or(0)
    }

    pub fn percentage(&self, base: u8) -> f64 {
        slot(base).map(|i| self.percentages[i]).unwrap_or(0.0)
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// G + C as a percentage of the sequence length.
    pub fn gc_content(&self) -> f64 {
        self.percentage(b'G') + self.percentage(b'C')
    }

    /// `(base, count, percentage)` in report order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize, f64)> + '_ {
        BASES
            .iter()
            .zip(self.counts.iter().zip(self.percentages.iter()))
            .map(|(&b, (&c, &p))| (b as char, c, p))
    }
}

#[inline]
fn slot(base: u8) -> Option<usize> {
    BASES.iter().position(|&b| b == base)
}
