//! Seeded random DNA for demo input.

use crate::alphabets::dna::BASES;
use crate::config::{RandomConfig, RANDOM_MAX_LEN, RANDOM_MIN_LEN};
use crate::error::{PcrError, PcrResult};
use crate::seq::dna::DnaSeq;

/// Uniform random sequence over `{A,T,G,C}` of `config.length` bases.
pub fn random_dna(config: &RandomConfig) -> PcrResult<DnaSeq> {
    if !(RANDOM_MIN_LEN..=RANDOM_MAX_LEN).contains(&config.length) {
        return Err(PcrError::InvalidRandomLength {
            len: config.length,
            min: RANDOM_MIN_LEN,
            max: RANDOM_MAX_LEN,
        });
    }

    let mut rng = Xorshift64::new(config.seed);
    let bytes = (0..config.length)
        .map(|_| BASES[(rng.next_u64() >> 62) as usize])
        .collect();
    Ok(DnaSeq::from_bytes_unchecked(bytes))
}

struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    fn new(seed: u64) -> Self {
        // zero is a fixed point of xorshift
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seq::dna::normalize;

    #[test]
    fn requested_length_and_alphabet() {
        let dna = random_dna(&RandomConfig {
            length: 500,
            seed: 7,
        })
        .unwrap();
        assert_eq!(dna.len(), 500);
        assert!(dna.as_bytes().iter().all(|b| BASES.contains(b)));
        // output passes the same validation as typed input
        assert_eq!(normalize(dna.as_str()).unwrap(), dna);
    }

    #[test]
    fn same_seed_same_sequence() {
        let config = RandomConfig::default();
        assert_eq!(random_dna(&config).unwrap(), random_dna(&config).unwrap());

        let other = RandomConfig {
            seed: 43,
            ..RandomConfig::default()
        };
        assert_ne!(random_dna(&config).unwrap(), random_dna(&other).unwrap());
    }

    #[test]
    fn zero_seed_is_usable() {
        let dna = random_dna(&RandomConfig { length: 10, seed: 0 }).unwrap();
        assert_eq!(dna.len(), 10);
    }

    #[test]
    fn all_bases_appear_in_long_sequences() {
        let dna = random_dna(&RandomConfig {
            length: RANDOM_MAX_LEN,
            seed: 99,
        })
        .unwrap();
        for base in BASES {
            assert!(dna.as_bytes().contains(&base));
        }
    }

    #[test]
    fn length_bounds() {
        for length in [0, RANDOM_MAX_LEN + 1] {
            assert_eq!(
                random_dna(&RandomConfig { length, seed: 1 }).unwrap_err(),
                PcrError::InvalidRandomLength {
                    len: length,
                    min: 1,
                    max: 10_000
                }
            );
        }
        assert!(random_dna(&RandomConfig { length: 1, seed: 1 }).is_ok());
        assert!(random_dna(&RandomConfig {
            length: RANDOM_MAX_LEN,
            seed: 1
        })
        .is_ok());
    }
}
