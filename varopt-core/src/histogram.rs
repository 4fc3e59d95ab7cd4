//! Annotation histogram: a collection of [AnnotationBin]s ordered by value.
//!
//! Variants are dropped into fixed-width bins of their annotation value.
//! Bins that end up too sparse to give a stable ti/tv ratio are folded into
//! their neighbours with [AnnotationBin::combine].

use std::collections::BTreeMap;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BIN_WIDTH, DEFAULT_MIN_VARIANTS};
use crate::errors::HistogramError;
use crate::models::{AnnotatedVariant, AnnotationBin, Substitution, VariantSet};

/// How variants are grouped into bins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinningConfig {
    /// Width of a bin in annotation units
    pub bin_width: f64,
    /// Bins with fewer novel + known variants are merged away
    pub min_variants_per_bin: u32,
}

impl Default for BinningConfig {
    fn default() -> Self {
        BinningConfig {
            bin_width: DEFAULT_BIN_WIDTH,
            min_variants_per_bin: DEFAULT_MIN_VARIANTS,
        }
    }
}

/// Report line for one bin.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinSummary {
    pub value: f64,
    pub ti_tv_novel: f64,
    pub ti_tv_known: f64,
    pub ti_tv_full: f64,
    pub ti_tv_truth: f64,
    pub true_positive_rate: f64,
    pub n_novel: u64,
    pub n_known: u64,
    pub n_full: u64,
    pub n_truth: u64,
}

impl TryFrom<&AnnotationBin> for BinSummary {
    type Error = HistogramError;

    fn try_from(bin: &AnnotationBin) -> Result<Self, HistogramError> {
        Ok(BinSummary {
            value: bin.value(),
            ti_tv_novel: bin.ti_tv_ratio(VariantSet::Novel)?,
            ti_tv_known: bin.ti_tv_ratio(VariantSet::Known)?,
            ti_tv_full: bin.ti_tv_ratio(VariantSet::Full)?,
            ti_tv_truth: bin.ti_tv_ratio(VariantSet::Truth)?,
            true_positive_rate: bin.true_positive_rate()?,
            n_novel: bin.variant_count(VariantSet::Novel)?,
            n_known: bin.variant_count(VariantSet::Known)?,
            n_full: bin.variant_count(VariantSet::Full)?,
            n_truth: bin.variant_count(VariantSet::Truth)?,
        })
    }
}

///
/// Bins keyed by their bucket index rather than by score, so two bins that
/// end up with the same value are never collapsed into one.
///
#[derive(Debug, Clone)]
pub struct AnnotationHistogram {
    config: BinningConfig,
    bins: BTreeMap<i64, AnnotationBin>,
}

impl AnnotationHistogram {
    pub fn new(config: BinningConfig) -> Result<Self, HistogramError> {
        if !config.bin_width.is_finite() || config.bin_width <= 0.0 {
            return Err(HistogramError::InvalidBinWidth(config.bin_width));
        }

        Ok(AnnotationHistogram {
            config,
            bins: BTreeMap::new(),
        })
    }

    pub fn config(&self) -> &BinningConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    ///
    /// Count one variant in the bin covering its annotation value.
    ///
    /// A new bin is scored with the lower edge of its bucket.
    ///
    pub fn add(&mut self, variant: &AnnotatedVariant) -> Result<(), HistogramError> {
        if !variant.value.is_finite() {
            return Err(HistogramError::NonFiniteValue(variant.value));
        }

        let width = self.config.bin_width;
        let quotient = (variant.value / width).floor();
        // i64::MAX as f64 rounds up to 2^63, so the upper bound is exclusive
        if !(quotient >= i64::MIN as f64 && quotient < i64::MAX as f64) {
            return Err(HistogramError::ValueOutOfRange {
                value: variant.value,
                bin_width: width,
            });
        }
        let bucket = quotient as i64;
        let bin = self
            .bins
            .entry(bucket)
            .or_insert_with(|| AnnotationBin::with_value(bucket as f64 * width));

        match variant.substitution {
            Substitution::Transition => bin.increment_transition(variant.is_novel, variant.is_true)?,
            Substitution::Transversion => {
                bin.increment_transversion(variant.is_novel, variant.is_true)?
            }
        }

        Ok(())
    }

    ///
    /// Fold bins holding fewer than `min_variants_per_bin` variants into
    /// their neighbours.
    ///
    /// Walking up in value, a sparse bin is combined with the next bin and
    /// the result takes the next bin's score. A sparse bin left at the top is
    /// combined with the bin below it and takes that bin's score. The
    /// histogram is unchanged if any merge overflows.
    ///
    pub fn merge_sparse_bins(&mut self) -> Result<(), HistogramError> {
        let min_variants = self.config.min_variants_per_bin as u64;
        let mut merged: Vec<(i64, AnnotationBin)> = Vec::with_capacity(self.bins.len());
        let mut pending: Option<AnnotationBin> = None;

        for (key, bin) in &self.bins {
            let bin = match pending.take() {
                Some(mut sparse) => {
                    sparse.combine(bin)?;
                    sparse
                }
                None => bin.clone(),
            };

            if bin.variant_count(VariantSet::Full)? < min_variants {
                pending = Some(bin);
            } else {
                merged.push((*key, bin));
            }
        }

        if let Some(mut sparse) = pending {
            match merged.pop() {
                Some((key, previous)) => {
                    sparse.combine(&previous)?;
                    merged.push((key, sparse));
                }
                None => {
                    // everything was sparse: keep it as one bin under the top key
                    if let Some(key) = self.bins.keys().next_back() {
                        merged.push((*key, sparse));
                    }
                }
            }
        }

        debug!(
            "Merged {} annotation bins into {}",
            self.bins.len(),
            merged.len()
        );
        self.bins = merged.into_iter().collect();

        Ok(())
    }

    ///
    /// Bins in ascending order of value.
    ///
    pub fn bins(&self) -> impl Iterator<Item = &AnnotationBin> {
        self.bins.values()
    }

    pub fn summaries(&self) -> Result<Vec<BinSummary>, HistogramError> {
        self.bins().map(BinSummary::try_from).collect()
    }
}
