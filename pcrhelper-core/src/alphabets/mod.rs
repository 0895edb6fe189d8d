pub mod dna;
pub mod rna;

use bit_set::BitSet;
use std::borrow::Borrow;
use vector_map::VecMap;

pub type SymbolRanks = VecMap<usize, u8>;

#[derive(Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    #[inline]
    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn is_word<C, T>(&self, text: T) -> bool
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter().all(|c| self.contains(*c.borrow()))
    }

    /// Position and value of the first byte outside the alphabet.
    pub fn first_mismatch<C, T>(&self, text: T) -> Option<(usize, u8)>
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        text.into_iter()
            .map(|c| *c.borrow())
            .enumerate()
            .find(|&(_, a)| !self.contains(a))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

/// Dense ranks `0..len` for the symbols of an alphabet, in ascending byte order.
#[derive(Default, Clone, Debug)]
pub struct RankTransform {
    pub ranks: SymbolRanks,
}

impl RankTransform {
    pub fn new(alphabet: &Alphabet) -> Self {
        let mut ranks = VecMap::new();
        for (r, c) in alphabet.symbols.iter().enumerate() {
            ranks.insert(c, r as u8);
        }
        RankTransform { ranks }
    }

    #[inline]
    pub fn get(&self, a: u8) -> Option<u8> {
        self.ranks.get(&(a as usize)).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.len() == 0
    }

    /// Occurrence count per rank. Symbols outside the alphabet are skipped.
    pub fn rank_counts<C, T>(&self, text: T) -> Vec<usize>
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut counts = vec![0usize; self.ranks.len()];
        for c in text {
            if let Some(r) = self.get(*c.borrow()) {
                counts[r as usize] += 1;
            }
        }
        counts
    }
}
