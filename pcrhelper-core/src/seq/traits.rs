use memchr::{memchr_iter, memmem};

/// Read-only byte view shared by the nucleotide sequence types.
pub trait SeqBytes {
    fn as_bytes(&self) -> &[u8];

    fn len(&self) -> usize {
        self.as_bytes().len()
    }

    fn is_empty(&self) -> bool {
        self.as_bytes().is_empty()
    }

    /// Occurrences of a single symbol.
    fn count(&self, symbol: u8) -> usize {
        memchr_iter(symbol, self.as_bytes()).count()
    }

    /// First occurrence of `pat` at or after `from`, at any offset.
    fn find_from(&self, pat: &[u8], from: usize) -> Option<usize> {
        let hay = self.as_bytes();
        if from > hay.len() {
            return None;
        }
        memmem::find(&hay[from..], pat).map(|i| from + i)
    }
}
