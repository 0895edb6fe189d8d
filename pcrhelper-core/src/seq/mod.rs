pub mod dna;
pub mod protein;
pub mod rna;
pub mod traits;

pub use dna::{normalize, normalize_with, DnaSeq};
pub use protein::{Protein, Residue};
pub use rna::RnaSeq;
pub use traits::SeqBytes;
