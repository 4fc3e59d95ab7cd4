use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::errors::AnnotationBinError;
use crate::models::VariantSet;

///
/// One annotation bucket of variant calls.
///
/// Counts transitions and transversions for the novel, known and truth
/// categories, plus a score (`value`) used to rank bins. Counts only ever
/// grow through the increment and combine operations; a negative count can
/// only come from an overflowed accumulation and is reported as
/// [AnnotationBinError::Overflow] by every derived metric.
///
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnnotationBin {
    value: f64,
    transitions: [i32; 3],
    transversions: [i32; 3],
}

impl AnnotationBin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: f64) -> Self {
        AnnotationBin {
            value,
            ..Default::default()
        }
    }

    ///
    /// Build a bin from raw counts, indexed novel, known, truth.
    ///
    pub fn from_counts(value: f64, transitions: [i32; 3], transversions: [i32; 3]) -> Self {
        AnnotationBin {
            value,
            transitions,
            transversions,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    ///
    /// Count one transition. The call lands in the novel or the known slot,
    /// and additionally in the truth slot when `is_true` is set.
    ///
    pub fn increment_transition(
        &mut self,
        is_novel: bool,
        is_true: bool,
    ) -> Result<(), AnnotationBinError> {
        increment(&mut self.transitions, is_novel, is_true)
    }

    ///
    /// Count one transversion, see [AnnotationBin::increment_transition].
    ///
    pub fn increment_transversion(
        &mut self,
        is_novel: bool,
        is_true: bool,
    ) -> Result<(), AnnotationBinError> {
        increment(&mut self.transversions, is_novel, is_true)
    }

    ///
    /// Fold the counts of `source` into this bin.
    ///
    /// All three categories are summed elementwise. The score of this bin is
    /// then **replaced** by the score of `source`: after a combine the bin is
    /// ranked where `source` was. Nothing is modified if a sum overflows.
    ///
    pub fn combine(&mut self, source: &AnnotationBin) -> Result<(), AnnotationBinError> {
        let mut transitions = self.transitions;
        let mut transversions = self.transversions;

        for category in Category::ALL {
            let idx = category.slot();
            transitions[idx] = transitions[idx]
                .checked_add(source.transitions[idx])
                .ok_or(AnnotationBinError::Overflow(category.set()))?;
            transversions[idx] = transversions[idx]
                .checked_add(source.transversions[idx])
                .ok_or(AnnotationBinError::Overflow(category.set()))?;
        }

        self.transitions = transitions;
        self.transversions = transversions;
        self.value = source.value;

        Ok(())
    }

    ///
    /// Number of transitions in a set.
    ///
    pub fn transitions(&self, set: VariantSet) -> Result<u64, AnnotationBinError> {
        checked_sum(&self.transitions, set)
    }

    ///
    /// Number of transversions in a set.
    ///
    pub fn transversions(&self, set: VariantSet) -> Result<u64, AnnotationBinError> {
        checked_sum(&self.transversions, set)
    }

    ///
    /// Transition/transversion ratio of a set.
    ///
    /// For [VariantSet::Full] this is the ratio of the novel plus known sums.
    /// Returns 0 when there are no transversions.
    ///
    pub fn ti_tv_ratio(&self, set: VariantSet) -> Result<f64, AnnotationBinError> {
        let ti = self.transitions(set)?;
        let tv = self.transversions(set)?;

        if tv == 0 {
            return Ok(0.0);
        }

        Ok(ti as f64 / tv as f64)
    }

    ///
    /// Fraction of the novel and known calls that are also in the truth set.
    /// Returns 0 for an empty bin.
    ///
    pub fn true_positive_rate(&self) -> Result<f64, AnnotationBinError> {
        let truth = self.variant_count(VariantSet::Truth)?;
        let total = self.variant_count(VariantSet::Full)?;

        if total == 0 {
            return Ok(0.0);
        }

        Ok(truth as f64 / total as f64)
    }

    ///
    /// Transitions plus transversions of a set.
    ///
    pub fn variant_count(&self, set: VariantSet) -> Result<u64, AnnotationBinError> {
        Ok(self.transitions(set)? + self.transversions(set)?)
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
        self.transitions = [0; 3];
        self.transversions = [0; 3];
    }

    ///
    /// Three-way comparison on the score alone.
    ///
    /// Bins with the same score compare `Equal` whatever their counts, so this
    /// ordering must not be used to deduplicate bins.
    ///
    pub fn compare_value(&self, other: &AnnotationBin) -> Ordering {
        if self.value < other.value {
            Ordering::Less
        } else if self.value > other.value {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl Display for AnnotationBin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AnnotationBin at {} (ti: {:?}, tv: {:?})",
            self.value, self.transitions, self.transversions
        )
    }
}

/// A category with its own slot in the count arrays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Category {
    Novel,
    Known,
    Truth,
}

impl Category {
    const ALL: [Category; 3] = [Category::Novel, Category::Known, Category::Truth];

    fn slot(self) -> usize {
        match self {
            Category::Novel => 0,
            Category::Known => 1,
            Category::Truth => 2,
        }
    }

    fn set(self) -> VariantSet {
        match self {
            Category::Novel => VariantSet::Novel,
            Category::Known => VariantSet::Known,
            Category::Truth => VariantSet::Truth,
        }
    }

    /// Stored categories summed to report `set`.
    fn of(set: VariantSet) -> &'static [Category] {
        match set {
            VariantSet::Full => &[Category::Novel, Category::Known],
            VariantSet::Novel => &[Category::Novel],
            VariantSet::Known => &[Category::Known],
            VariantSet::Truth => &[Category::Truth],
        }
    }
}

fn increment(counts: &mut [i32; 3], is_novel: bool, is_true: bool) -> Result<(), AnnotationBinError> {
    let mut updated = *counts;

    let membership = if is_novel {
        Category::Novel
    } else {
        Category::Known
    };
    bump(&mut updated, membership)?;

    if is_true {
        bump(&mut updated, Category::Truth)?;
    }

    *counts = updated;
    Ok(())
}

fn bump(counts: &mut [i32; 3], category: Category) -> Result<(), AnnotationBinError> {
    let idx = category.slot();
    counts[idx] = counts[idx]
        .checked_add(1)
        .ok_or(AnnotationBinError::Overflow(category.set()))?;
    Ok(())
}

fn checked_sum(counts: &[i32; 3], set: VariantSet) -> Result<u64, AnnotationBinError> {
    Category::of(set).iter().try_fold(0u64, |acc, category| {
        let count = counts[category.slot()];
        if count < 0 {
            return Err(AnnotationBinError::Overflow(set));
        }
        Ok(acc + count as u64)
    })
}
