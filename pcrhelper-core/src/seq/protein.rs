use std::fmt;

/// One translated residue, named by its three-letter code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Residue {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
    /// Placeholder for a codon with symbols outside `{A,C,G,U}`.
    #[cfg_attr(feature = "serde", serde(rename = "Xxx"))]
    Unknown,
}

impl Residue {
    pub const fn three_letter(self) -> &'static str {
        match self {
            Residue::Ala => "Ala",
            Residue::Arg => "Arg",
            Residue::Asn => "Asn",
            Residue::Asp => "Asp",
            Residue::Cys => "Cys",
            Residue::Gln => "Gln",
            Residue::Glu => "Glu",
            Residue::Gly => "Gly",
            Residue::His => "His",
            Residue::Ile => "Ile",
            Residue::Leu => "Leu",
            Residue::Lys => "Lys",
            Residue::Met => "Met",
            Residue::Phe => "Phe",
            Residue::Pro => "Pro",
            Residue::Ser => "Ser",
            Residue::Thr => "Thr",
            Residue::Trp => "Trp",
            Residue::Tyr => "Tyr",
            Residue::Val => "Val",
            Residue::Unknown => "Xxx",
        }
    }

    pub const fn one_letter(self) -> char {
        match self {
            Residue::Ala => 'A',
            Residue::Arg => 'R',
            Residue::Asn => 'N',
            Residue::Asp => 'D',
            Residue::Cys => 'C',
            Residue::Gln => 'Q',
            Residue::Glu => 'E',
            Residue::Gly => 'G',
            Residue::His => 'H',
            Residue::Ile => 'I',
            Residue::Leu => 'L',
            Residue::Lys => 'K',
            Residue::Met => 'M',
            Residue::Phe => 'F',
            Residue::Pro => 'P',
            Residue::Ser => 'S',
            Residue::Thr => 'T',
            Residue::Trp => 'W',
            Residue::Tyr => 'Y',
            Residue::Val => 'V',
            Residue::Unknown => 'X',
        }
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.three_letter())
    }
}

/// Translated residues in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(transparent))]
pub struct Protein {
    residues: Vec<Residue>,
}

impl Protein {
    pub fn new(residues: Vec<Residue>) -> Self {
        Self { residues }
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub(crate) fn push(&mut self, residue: Residue) {
        self.residues.push(residue);
    }

    /// Three-letter codes joined by `-`, e.g. `Met-Phe`.
    pub fn to_three_letter(&self) -> String {
        let mut out = String::with_capacity(self.residues.len() * 4);
        for (i, r) in self.residues.iter().enumerate() {
            if i > 0 {
                out.push('-');
            }
            out.push_str(r.three_letter());
        }
        out
    }

    /// One-letter codes, `X` for unknown, e.g. `MF`.
    pub fn to_one_letter(&self) -> String {
        self.residues.iter().map(|r| r.one_letter()).collect()
    }
}

impl fmt::Display for Protein {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_three_letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joined_three_letter_codes() {
        let p = Protein::new(vec![Residue::Met, Residue::Phe]);
        assert_eq!(p.to_three_letter(), "Met-Phe");
        assert_eq!(p.to_string(), "Met-Phe");
        assert_eq!(p.to_one_letter(), "MF");
    }

    #[test]
    fn empty_protein_formats_empty() {
        let p = Protein::default();
        assert!(p.is_empty());
        assert_eq!(p.to_three_letter(), "");
    }

    #[test]
    fn unknown_is_xxx() {
        let p = Protein::new(vec![Residue::Met, Residue::Unknown, Residue::Lys]);
        assert_eq!(p.to_three_letter(), "Met-Xxx-Lys");
        assert_eq!(p.to_one_letter(), "MXK");
    }
}
