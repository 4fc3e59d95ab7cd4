use serde::{Deserialize, Serialize};

/// Class of a single-nucleotide substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Substitution {
    /// Purine to purine (A<->G) or pyrimidine to pyrimidine (C<->T).
    Transition,
    /// Purine to pyrimidine or back.
    Transversion,
}

impl Substitution {
    ///
    /// Classify a reference/alternate base pair.
    ///
    /// Returns `None` for identical bases or anything outside `ACGT`
    /// (case-insensitive).
    ///
    pub fn classify(ref_base: u8, alt_base: u8) -> Option<Substitution> {
        let ref_base = ref_base.to_ascii_uppercase();
        let alt_base = alt_base.to_ascii_uppercase();

        if ref_base == alt_base {
            return None;
        }

        match (is_purine(ref_base)?, is_purine(alt_base)?) {
            (true, true) | (false, false) => Some(Substitution::Transition),
            _ => Some(Substitution::Transversion),
        }
    }

    ///
    /// Classify REF/ALT allele strings. Only single-base alleles are SNVs.
    ///
    pub fn from_alleles(ref_allele: &str, alt_allele: &str) -> Option<Substitution> {
        match (ref_allele.as_bytes(), alt_allele.as_bytes()) {
            ([r], [a]) => Substitution::classify(*r, *a),
            _ => None,
        }
    }
}

fn is_purine(base: u8) -> Option<bool> {
    match base {
        b'A' | b'G' => Some(true),
        b'C' | b'T' => Some(false),
        _ => None,
    }
}

///
/// A variant call reduced to what an annotation bin needs.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedVariant {
    /// Value of the binning annotation
    pub value: f64,
    pub substitution: Substitution,
    /// Absent from dbSNP
    pub is_novel: bool,
    /// Present in the truth set
    pub is_true: bool,
}
