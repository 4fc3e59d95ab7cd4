use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

///
/// Membership category of a variant call.
///
/// `Novel` and `Known` partition the calls by dbSNP membership, `Truth` marks
/// calls that are also in the truth set and may overlap either of them.
/// `Full` is the aggregate of `Novel` and `Known`; truth-set counts are never
/// part of it.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantSet {
    Full,
    Novel,
    Known,
    Truth,
}

impl VariantSet {
    /// The three stored categories, in storage order.
    pub const CATEGORIES: [VariantSet; 3] = [VariantSet::Novel, VariantSet::Known, VariantSet::Truth];

    ///
    /// Storage slot of a category, `None` for the `Full` aggregate.
    ///
    pub fn index(&self) -> Option<usize> {
        match self {
            VariantSet::Full => None,
            VariantSet::Novel => Some(0),
            VariantSet::Known => Some(1),
            VariantSet::Truth => Some(2),
        }
    }

    ///
    /// Categories that make up this set.
    ///
    pub fn members(&self) -> &'static [VariantSet] {
        match self {
            VariantSet::Full => &[VariantSet::Novel, VariantSet::Known],
            VariantSet::Novel => &[VariantSet::Novel],
            VariantSet::Known => &[VariantSet::Known],
            VariantSet::Truth => &[VariantSet::Truth],
        }
    }
}

impl FromStr for VariantSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "full" | "all" => Ok(VariantSet::Full),
            "novel" => Ok(VariantSet::Novel),
            "known" | "dbsnp" => Ok(VariantSet::Known),
            "truth" => Ok(VariantSet::Truth),
            _ => Err(format!("Invalid variant set: {}", s)),
        }
    }
}

impl Display for VariantSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VariantSet::Full => "full",
            VariantSet::Novel => "novel",
            VariantSet::Known => "known",
            VariantSet::Truth => "truth",
        };
        write!(f, "{}", name)
    }
}
