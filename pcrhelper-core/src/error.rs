use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PcrError {
    #[error("DNA sequence is empty")]
    EmptySequence,

    #[error("invalid character '{ch}' at position {pos}; DNA may only contain A, T, G, C")]
    InvalidCharacter { ch: char, pos: usize },

    #[error("sequence length {len} exceeds the configured maximum of {max} bases")]
    SequenceTooLong { len: usize, max: usize },

    #[error("random sequence length must be between {min} and {max} (got {len})")]
    InvalidRandomLength { len: usize, min: usize, max: usize },
}

pub type PcrResult<T> = Result<T, PcrError>;
