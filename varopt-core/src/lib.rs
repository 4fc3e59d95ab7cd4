//! Annotation bins for variant call set quality assessment.
//!
//! Variant calls are grouped by the value of one annotation (QUAL, an INFO
//! field, ...). Each group is an [`AnnotationBin`] that counts transitions and
//! transversions for novel, known (dbSNP) and truth-set calls. From those
//! counts the crate derives:
//!
//! - the ti/tv ratio per category or over the full (novel + known) set
//! - the truth-set rate of a bin
//! - variant counts per category
//!
//! # Example
//!
//! ```no_run
//! use varopt_core::histogram::{AnnotationHistogram, BinningConfig};
//! use varopt_core::vcf::{read_annotated_variants, VcfOptions};
//!
//! let scan = read_annotated_variants("calls.vcf.gz", &VcfOptions::default()).unwrap();
//!
//! let mut histogram = AnnotationHistogram::new(BinningConfig::default()).unwrap();
//! for variant in &scan.variants {
//!     histogram.add(variant).unwrap();
//! }
//! histogram.merge_sparse_bins().unwrap();
//!
//! let summaries = histogram.summaries().unwrap();
//! ```

pub mod consts;
pub mod errors;
pub mod histogram;
pub mod models;
pub mod utils;
pub mod vcf;

// re-exports
pub use errors::{AnnotationBinError, HistogramError, VcfError};
pub use histogram::{AnnotationHistogram, BinSummary, BinningConfig};
pub use models::{AnnotatedVariant, AnnotationBin, Substitution, VariantSet};
